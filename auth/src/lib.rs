//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the recipe service:
//! - Password hashing (Argon2id)
//! - Access and refresh token issuance and validation, each kind signed with its own secret
//! - Authentication coordination
//!
//! The library knows nothing about users or storage. Services adapt these
//! implementations behind their own ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenCodecConfig, TokenKind, TokenSubject};
//!
//! let codec = TokenCodec::new(&TokenCodecConfig {
//!     access_secret: "access_secret_key_at_least_32_bytes!".to_string(),
//!     refresh_secret: "refresh_secret_key_at_least_32_bytes".to_string(),
//!     access_lifetime_hours: 24,
//! });
//! let subject = TokenSubject::new("user123", "alice@example.com", "user");
//!
//! let token = codec.issue_access_token(&subject).unwrap();
//! let claims = codec.verify(&token, TokenKind::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert!(codec.verify(&token, TokenKind::Refresh).is_err());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenCodec;
pub use jwt::TokenCodecConfig;
pub use jwt::TokenKind;
pub use jwt::TokenSubject;
pub use jwt::REFRESH_TOKEN_LIFETIME_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
