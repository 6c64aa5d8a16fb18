use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::TokenSubject;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn subject(user: &User) -> TokenSubject {
        TokenSubject::new(user.id, user.email.as_str(), user.role.as_str())
    }

    /// Load the user a verified token was issued for.
    async fn user_for_claims(&self, claims: &Claims) -> Result<User, UserError> {
        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a user id");
            UserError::InvalidToken
        })?;

        match self.repository.find_by_id(&user_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(user_id = %user_id, "Token subject no longer exists");
                Err(UserError::InvalidToken)
            }
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: Role::User,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError> {
        let user = match EmailAddress::new(email.to_string()) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            self.authenticator.reject_password(password);
            tracing::warn!("Login failed: unknown account");
            return Err(UserError::InvalidCredentials);
        };

        let pair = self
            .authenticator
            .authenticate(password, &user.password_hash, &Self::subject(&user))
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login failed: wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    UserError::Unknown(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => {
                    UserError::Unknown(format!("Token generation failed: {}", err))
                }
            })?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(pair.into())
    }

    async fn validate_token(&self, token: &str) -> Result<User, UserError> {
        let claims = self.authenticator.verify_access_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Access token rejected");
            UserError::InvalidToken
        })?;

        self.user_for_claims(&claims).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, UserError> {
        let claims = self
            .authenticator
            .verify_refresh_token(refresh_token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Refresh token rejected");
                UserError::InvalidToken
            })?;

        let user = self.user_for_claims(&claims).await?;

        let pair = self
            .authenticator
            .issue_token_pair(&Self::subject(&user))
            .map_err(|e| UserError::Unknown(format!("Token generation failed: {}", e)))?;

        tracing::debug!(user_id = %user.id, "Token pair refreshed");
        Ok(pair.into())
    }

    fn require_role(&self, user: &User, role: Role) -> Result<(), UserError> {
        if user.has_role(role) {
            Ok(())
        } else {
            tracing::warn!(user_id = %user.id, required = %role, "Role check failed");
            Err(UserError::Unauthorized {
                required: role.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenCodecConfig;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(&TokenCodecConfig {
            access_secret: "test_access_secret_at_least_32_bytes".to_string(),
            refresh_secret: "test_refresh_secret_at_least_32_byte".to_string(),
            access_lifetime_hours: 24,
        }))
    }

    fn stored_user(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "alice@example.com"
                    && user.role == Role::User
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let command = RegisterCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_eq!(user.role, Role::User);
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::DuplicateEmail(user.email.to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let command = RegisterCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(result.unwrap_err(), UserError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let mut repository = MockTestUserRepository::new();

        let returned_user = user.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "alice@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));

        let pair = service
            .login("alice@example.com", "password123")
            .await
            .unwrap();

        assert!(pair.expires_in > 0);
        let claims = authenticator.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "user");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "alice@example.com")
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "nobody@example.com")
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let wrong_password = service
            .login("alice@example.com", "wrong")
            .await
            .unwrap_err();
        let unknown_email = service
            .login("nobody@example.com", "password123")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, UserError::InvalidCredentials));
        assert!(matches!(unknown_email, UserError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_malformed_email_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.login("not-an-email", "password123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_validate_token_success() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let pair = authenticator
            .issue_token_pair(&AuthService::<MockTestUserRepository>::subject(&user))
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        let user_id = user.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let validated = service.validate_token(&pair.access_token).await.unwrap();
        assert_eq!(validated.id, user_id);
    }

    #[tokio::test]
    async fn test_validate_token_for_deleted_user() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let pair = authenticator
            .issue_token_pair(&AuthService::<MockTestUserRepository>::subject(&user))
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.validate_token(&pair.access_token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_validate_token_rejects_refresh_token() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let pair = authenticator
            .issue_token_pair(&AuthService::<MockTestUserRepository>::subject(&user))
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_id().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.validate_token(&pair.refresh_token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let pair = authenticator
            .issue_token_pair(&AuthService::<MockTestUserRepository>::subject(&user))
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_id().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.refresh(&pair.access_token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_refresh_issues_valid_access_token() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let pair = authenticator
            .issue_token_pair(&AuthService::<MockTestUserRepository>::subject(&user))
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        let user_id = user.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(2)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let refreshed = service.refresh(&pair.refresh_token).await.unwrap();
        assert!(refreshed.expires_in > 0);

        let validated = service
            .validate_token(&refreshed.access_token)
            .await
            .unwrap();
        assert_eq!(validated.id, user_id);
    }

    #[tokio::test]
    async fn test_require_role() {
        let authenticator = authenticator();
        let mut user = stored_user(&authenticator, "password123");
        let service = AuthService::new(Arc::new(MockTestUserRepository::new()), authenticator);

        assert!(matches!(
            service.require_role(&user, Role::Admin),
            Err(UserError::Unauthorized { .. })
        ));

        user.role = Role::Admin;
        assert!(service.require_role(&user, Role::Admin).is_ok());
    }
}
