use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::access_code::AccessCode;
use crate::domain::recipe::models::RecipeId;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::errors::ShareCodeIdError;

/// Share code unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareCodeId(pub Uuid);

impl ShareCodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a share code ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ShareCodeIdError> {
        Uuid::parse_str(s)
            .map(ShareCodeId)
            .map_err(|e| ShareCodeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ShareCodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShareCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Grant of read access to one published recipe.
///
/// `use_count` only grows and never passes `max_uses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode {
    pub id: ShareCodeId,
    pub recipe_id: RecipeId,
    pub code: AccessCode,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub created_at: DateTime<Utc>,
}

impl ShareCode {
    pub fn is_exhausted(&self) -> bool {
        self.max_uses
            .map_or(false, |max_uses| self.use_count >= max_uses)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| now > expires_at)
    }

    /// Check whether the code may be redeemed at `now`.
    ///
    /// Exhaustion is reported before expiry.
    ///
    /// # Errors
    /// * `MaxUsesReached` - use count has reached max uses
    /// * `Expired` - expiry has passed
    pub fn ensure_redeemable(&self, now: DateTime<Utc>) -> Result<(), ShareCodeError> {
        if self.is_exhausted() {
            return Err(ShareCodeError::MaxUsesReached);
        }
        if self.is_expired(now) {
            return Err(ShareCodeError::Expired);
        }
        Ok(())
    }
}

/// Share code together with the title and slug of its recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCodeWithRecipe {
    pub share_code: ShareCode,
    pub recipe_title: String,
    pub recipe_slug: String,
}

/// Command to create a share code
#[derive(Debug)]
pub struct CreateShareCodeCommand {
    pub recipe_id: RecipeId,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
}

impl CreateShareCodeCommand {
    /// # Errors
    /// * `InvalidMaxUses` - max uses is present and below 1
    pub fn new(
        recipe_id: RecipeId,
        expires_at: Option<DateTime<Utc>>,
        max_uses: Option<i32>,
    ) -> Result<Self, ShareCodeError> {
        if let Some(max_uses) = max_uses.filter(|m| *m < 1) {
            return Err(ShareCodeError::InvalidMaxUses(max_uses));
        }

        Ok(Self {
            recipe_id,
            expires_at,
            max_uses,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn share_code(max_uses: Option<i32>, use_count: i32, expires_in: Option<Duration>) -> ShareCode {
        ShareCode {
            id: ShareCodeId::new(),
            recipe_id: RecipeId::new(),
            code: AccessCode::generate(),
            expires_at: expires_in.map(|d| Utc::now() + d),
            max_uses,
            use_count,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unlimited_code_is_redeemable() {
        let code = share_code(None, 1_000, None);
        assert!(code.ensure_redeemable(Utc::now()).is_ok());
    }

    #[test]
    fn test_exhausted_code() {
        let code = share_code(Some(1), 1, None);
        assert!(matches!(
            code.ensure_redeemable(Utc::now()),
            Err(ShareCodeError::MaxUsesReached)
        ));
    }

    #[test]
    fn test_expired_code() {
        let code = share_code(Some(5), 0, Some(Duration::hours(-1)));
        assert!(matches!(
            code.ensure_redeemable(Utc::now()),
            Err(ShareCodeError::Expired)
        ));
    }

    #[test]
    fn test_exhaustion_reported_before_expiry() {
        let code = share_code(Some(1), 1, Some(Duration::hours(-1)));
        assert!(matches!(
            code.ensure_redeemable(Utc::now()),
            Err(ShareCodeError::MaxUsesReached)
        ));
    }

    #[test]
    fn test_command_rejects_non_positive_max_uses() {
        assert!(matches!(
            CreateShareCodeCommand::new(RecipeId::new(), None, Some(0)),
            Err(ShareCodeError::InvalidMaxUses(0))
        ));
        assert!(CreateShareCodeCommand::new(RecipeId::new(), None, Some(1)).is_ok());
        assert!(CreateShareCodeCommand::new(RecipeId::new(), None, None).is_ok());
    }
}
