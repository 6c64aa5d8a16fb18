use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::access_code::AccessCode;
use crate::domain::invite::errors::InviteError;
use crate::domain::invite::errors::InviteIdError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Invite unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InviteId(pub Uuid);

impl InviteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an invite ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, InviteIdError> {
        Uuid::parse_str(s)
            .map(InviteId)
            .map_err(|e| InviteIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for InviteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InviteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Single-use invitation granting a role.
///
/// `used_at` and `used_by` are set together, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInvite {
    pub id: InviteId,
    pub code: AccessCode,
    pub email: Option<EmailAddress>,
    pub role: Role,
    pub created_by: UserId,
    pub expires_at: Option<DateTime<Utc>>,
    pub used_at: Option<DateTime<Utc>>,
    pub used_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl UserInvite {
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| now > expires_at)
    }

    /// Check whether the invite may be redeemed at `now`.
    ///
    /// Prior use is reported before expiry.
    ///
    /// # Errors
    /// * `AlreadyUsed` - invite was redeemed before
    /// * `Expired` - expiry has passed
    pub fn ensure_redeemable(&self, now: DateTime<Utc>) -> Result<(), InviteError> {
        if self.is_used() {
            return Err(InviteError::AlreadyUsed);
        }
        if self.is_expired(now) {
            return Err(InviteError::Expired);
        }
        Ok(())
    }
}

/// Command to create an invite
#[derive(Debug)]
pub struct CreateInviteCommand {
    pub email: Option<EmailAddress>,
    pub role: Role,
    pub created_by: UserId,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateInviteCommand {
    /// Build a command from raw request values.
    ///
    /// An empty role means `user`. An empty email means the invite is not
    /// addressed to anyone in particular.
    ///
    /// # Errors
    /// * `InvalidRole` - role is neither empty, "user" nor "admin"
    /// * `InvalidEmail` - email is present but malformed
    pub fn new(
        email: Option<String>,
        role: &str,
        created_by: UserId,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, InviteError> {
        let role = if role.is_empty() {
            Role::User
        } else {
            role.parse::<Role>()?
        };

        let email = email
            .filter(|e| !e.is_empty())
            .map(EmailAddress::new)
            .transpose()?;

        Ok(Self {
            email,
            role,
            created_by,
            expires_at,
        })
    }
}
