use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account with role `user`.
    ///
    /// # Arguments
    /// * `command` - Validated email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Exchange credentials for a token pair.
    ///
    /// # Arguments
    /// * `email` - Raw email as submitted
    /// * `password` - Raw password as submitted
    ///
    /// # Returns
    /// Access token, refresh token and access lifetime in seconds
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError>;

    /// Resolve an access token to the current user.
    ///
    /// # Errors
    /// * `InvalidToken` - Token invalid, expired, of the wrong kind, or its user no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn validate_token(&self, token: &str) -> Result<User, UserError>;

    /// Exchange a refresh token for a new token pair.
    ///
    /// The presented refresh token stays valid until it expires.
    ///
    /// # Errors
    /// * `InvalidToken` - Token invalid, expired, of the wrong kind, or its user no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, UserError>;

    /// Check that a user holds a role.
    ///
    /// # Errors
    /// * `Unauthorized` - User has a different role
    fn require_role(&self, user: &User, role: Role) -> Result<(), UserError>;
}

/// Credential store for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
