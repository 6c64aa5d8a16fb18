use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::access_code::AccessCode;
use crate::domain::recipe::models::RecipeId;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::models::CreateShareCodeCommand;
use crate::domain::share_code::models::ShareCode;
use crate::domain::share_code::models::ShareCodeId;
use crate::domain::share_code::models::ShareCodeWithRecipe;

/// Port for share code operations.
#[async_trait]
pub trait ShareCodeServicePort: Send + Sync + 'static {
    /// Issue a share code for a published recipe.
    ///
    /// # Arguments
    /// * `command` - Recipe, optional expiry and optional use limit
    ///
    /// # Returns
    /// Created share code with a fresh 16-character hex code and zero uses
    ///
    /// # Errors
    /// * `RecipeNotFound` - Recipe does not exist
    /// * `RecipeNotPublished` - Recipe exists but is not published
    /// * `DatabaseError` - Database operation failed
    async fn create_share_code(
        &self,
        command: CreateShareCodeCommand,
    ) -> Result<ShareCode, ShareCodeError>;

    /// Look up a redeemable share code without consuming a use.
    ///
    /// # Errors
    /// * `NotFound` - No such code
    /// * `MaxUsesReached` - Use limit reached (checked before expiry)
    /// * `Expired` - Expiry has passed
    /// * `DatabaseError` - Database operation failed
    async fn get_share_code(&self, code: &AccessCode)
        -> Result<ShareCodeWithRecipe, ShareCodeError>;

    /// Consume one use of a share code.
    ///
    /// # Errors
    /// * `NotFound` - No such code
    /// * `MaxUsesReached` - Use limit reached, including by a concurrent redemption
    /// * `Expired` - Expiry has passed
    /// * `DatabaseError` - Database operation failed
    async fn use_share_code(&self, code: &AccessCode) -> Result<(), ShareCodeError>;

    /// Validate a share code, consume one use and return the recipe view.
    ///
    /// # Returns
    /// Share code as seen before this use was counted
    ///
    /// # Errors
    /// Same as `use_share_code`
    async fn access_recipe(&self, code: &AccessCode)
        -> Result<ShareCodeWithRecipe, ShareCodeError>;

    /// List all share codes issued for a recipe, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_recipe(&self, recipe_id: &RecipeId)
        -> Result<Vec<ShareCode>, ShareCodeError>;

    /// Revoke a share code.
    ///
    /// # Errors
    /// * `NotFound` - No such share code
    /// * `DatabaseError` - Database operation failed
    async fn delete_share_code(&self, id: &ShareCodeId) -> Result<(), ShareCodeError>;
}

/// Persistence operations for share codes.
#[async_trait]
pub trait ShareCodeRepository: Send + Sync + 'static {
    /// Persist a new share code.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, share_code: ShareCode) -> Result<ShareCode, ShareCodeError>;

    /// Retrieve a share code and its recipe's title and slug.
    ///
    /// # Returns
    /// Optional share code (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_code(
        &self,
        code: &AccessCode,
    ) -> Result<Option<ShareCodeWithRecipe>, ShareCodeError>;

    /// Retrieve all share codes for a recipe, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_recipe(&self, recipe_id: &RecipeId) -> Result<Vec<ShareCode>, ShareCodeError>;

    /// Atomically increment the use count if the code is still redeemable at `now`.
    ///
    /// The check and the increment happen in one conditional update, so two
    /// concurrent redemptions can never push the count past `max_uses`.
    ///
    /// # Returns
    /// True if a use was counted, false if the code was missing, exhausted or expired
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn increment_use(
        &self,
        id: &ShareCodeId,
        now: DateTime<Utc>,
    ) -> Result<bool, ShareCodeError>;

    /// Remove a share code.
    ///
    /// # Errors
    /// * `NotFound` - Share code does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ShareCodeId) -> Result<(), ShareCodeError>;
}
