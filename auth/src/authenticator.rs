use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenCodecConfig;
use crate::jwt::TokenKind;
use crate::jwt::TokenSubject;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Access/refresh token pair handed to a client after login or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Token secrets and access token lifetime
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(config: &TokenCodecConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(config),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Spend the same effort as a password check without a stored hash.
    pub fn reject_password(&self, password: &str) {
        self.password_hasher.dummy_verify(password);
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to embed in the tokens
    ///
    /// # Returns
    /// Fresh access and refresh tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &TokenSubject,
    ) -> Result<TokenPair, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token_pair(subject)?)
    }

    /// Issue a token pair without password verification.
    ///
    /// Used by refresh flows once the refresh token has been verified.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token_pair(&self, subject: &TokenSubject) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.token_codec.issue_access_token(subject)?,
            refresh_token: self.token_codec.issue_refresh_token(subject)?,
            expires_in: self.token_codec.access_lifetime_seconds(),
        })
    }

    /// Validate an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token is invalid, expired, or a refresh token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_codec.verify(token, TokenKind::Access)
    }

    /// Validate a refresh token.
    ///
    /// # Errors
    /// * `JwtError` - Token is invalid, expired, or an access token
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_codec.verify(token, TokenKind::Refresh)
    }
}
