use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Distinguishes short-lived access tokens from long-lived refresh tokens.
///
/// Embedded in every token so a token of one kind can never be accepted
/// where the other is expected, even if both secrets were configured alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl TokenSubject {
    pub fn new(user_id: impl ToString, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Claims carried by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    pub email: String,

    pub role: String,

    pub kind: TokenKind,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, valid from now for `lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued for
    /// * `kind` - Access or refresh
    /// * `lifetime` - Duration until the token expires
    ///
    /// # Returns
    /// Claims with iat set to now and exp set to now + lifetime
    ///
    /// # Errors
    /// * `EncodingFailed` - now + lifetime is not a representable timestamp
    pub fn for_subject(
        subject: &TokenSubject,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::EncodingFailed(format!("{} token lifetime out of range", kind))
        })?;

        Ok(Self {
            sub: subject.user_id.clone(),
            email: subject.email.clone(),
            role: subject.role.clone(),
            kind,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Override the expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }
}
