use chrono::Duration;

use super::claims::Claims;
use super::claims::TokenKind;
use super::claims::TokenSubject;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Refresh tokens always live for seven days.
pub const REFRESH_TOKEN_LIFETIME_HOURS: i64 = 7 * 24;

/// Secrets and lifetimes for a [`TokenCodec`].
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_lifetime_hours: i64,
}

/// Issues and verifies access and refresh tokens.
///
/// Each kind is signed with its own secret; a token is only accepted when
/// verified as the kind it was issued as.
pub struct TokenCodec {
    access: JwtHandler,
    refresh: JwtHandler,
    access_lifetime_hours: i64,
}

impl TokenCodec {
    pub fn new(config: &TokenCodecConfig) -> Self {
        Self {
            access: JwtHandler::new(config.access_secret.as_bytes()),
            refresh: JwtHandler::new(config.refresh_secret.as_bytes()),
            access_lifetime_hours: config.access_lifetime_hours,
        }
    }

    /// Issue an access token valid for the configured number of hours.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed, or the configured lifetime is out of range
    pub fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        let lifetime = Duration::try_hours(self.access_lifetime_hours).ok_or_else(|| {
            JwtError::EncodingFailed(format!(
                "access token lifetime of {} hours out of range",
                self.access_lifetime_hours
            ))
        })?;
        let claims = Claims::for_subject(subject, TokenKind::Access, lifetime)?;
        self.access.encode(&claims)
    }

    /// Issue a refresh token valid for seven days.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        let claims = Claims::for_subject(
            subject,
            TokenKind::Refresh,
            Duration::hours(REFRESH_TOKEN_LIFETIME_HOURS),
        )?;
        self.refresh.encode(&claims)
    }

    /// Verify a token as the given kind.
    ///
    /// # Arguments
    /// * `token` - Encoded token
    /// * `kind` - Kind the caller expects; selects the verifying secret
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Not signed with the secret for `kind`
    /// * `Expired` - Token lifetime has passed
    /// * `Malformed` - Token cannot be parsed
    /// * `KindMismatch` - Signature verified but the embedded kind differs
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, JwtError> {
        let handler = match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        };

        let claims: Claims = handler.decode(token)?;
        if claims.kind != kind {
            return Err(JwtError::KindMismatch {
                expected: kind,
                actual: claims.kind,
            });
        }

        Ok(claims)
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_lifetime_seconds(&self) -> i64 {
        self.access_lifetime_hours.saturating_mul(3600)
    }
}
