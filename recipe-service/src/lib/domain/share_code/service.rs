use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access_code::AccessCode;
use crate::domain::recipe::models::RecipeId;
use crate::domain::recipe::ports::RecipeRepository;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::models::CreateShareCodeCommand;
use crate::domain::share_code::models::ShareCode;
use crate::domain::share_code::models::ShareCodeId;
use crate::domain::share_code::models::ShareCodeWithRecipe;
use crate::domain::share_code::ports::ShareCodeRepository;
use crate::domain::share_code::ports::ShareCodeServicePort;

/// Domain service for issuing and redeeming recipe share codes.
pub struct ShareCodeService<SR, RR>
where
    SR: ShareCodeRepository,
    RR: RecipeRepository,
{
    repository: Arc<SR>,
    recipes: Arc<RR>,
}

impl<SR, RR> ShareCodeService<SR, RR>
where
    SR: ShareCodeRepository,
    RR: RecipeRepository,
{
    /// Create a new share code service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Share code persistence implementation
    /// * `recipes` - Read access to recipes
    pub fn new(repository: Arc<SR>, recipes: Arc<RR>) -> Self {
        Self {
            repository,
            recipes,
        }
    }

    async fn find(&self, code: &AccessCode) -> Result<ShareCodeWithRecipe, ShareCodeError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| ShareCodeError::NotFound(code.to_string()))
    }
}

#[async_trait]
impl<SR, RR> ShareCodeServicePort for ShareCodeService<SR, RR>
where
    SR: ShareCodeRepository,
    RR: RecipeRepository,
{
    async fn create_share_code(
        &self,
        command: CreateShareCodeCommand,
    ) -> Result<ShareCode, ShareCodeError> {
        let recipe = self
            .recipes
            .find_by_id(&command.recipe_id)
            .await?
            .ok_or_else(|| ShareCodeError::RecipeNotFound(command.recipe_id.to_string()))?;

        if !recipe.is_published {
            return Err(ShareCodeError::RecipeNotPublished(recipe.id.to_string()));
        }

        let share_code = ShareCode {
            id: ShareCodeId::new(),
            recipe_id: recipe.id,
            code: AccessCode::generate(),
            expires_at: command.expires_at,
            max_uses: command.max_uses,
            use_count: 0,
            created_at: Utc::now(),
        };

        let created = self.repository.create(share_code).await?;
        tracing::info!(
            share_code_id = %created.id,
            recipe_id = %created.recipe_id,
            max_uses = ?created.max_uses,
            expires_at = ?created.expires_at,
            "Share code created"
        );

        Ok(created)
    }

    async fn get_share_code(
        &self,
        code: &AccessCode,
    ) -> Result<ShareCodeWithRecipe, ShareCodeError> {
        let found = self.find(code).await?;
        found.share_code.ensure_redeemable(Utc::now())?;
        Ok(found)
    }

    async fn use_share_code(&self, code: &AccessCode) -> Result<(), ShareCodeError> {
        let now = Utc::now();
        let found = self.find(code).await?;
        found.share_code.ensure_redeemable(now)?;

        if self
            .repository
            .increment_use(&found.share_code.id, now)
            .await?
        {
            tracing::debug!(share_code_id = %found.share_code.id, "Share code used");
            return Ok(());
        }

        // Lost the conditional update; report why from the current state.
        let current = self.find(code).await?;
        current.share_code.ensure_redeemable(now)?;
        tracing::warn!(share_code_id = %current.share_code.id, "Share code redemption raced");
        Err(ShareCodeError::MaxUsesReached)
    }

    async fn access_recipe(
        &self,
        code: &AccessCode,
    ) -> Result<ShareCodeWithRecipe, ShareCodeError> {
        let found = self.get_share_code(code).await?;
        self.use_share_code(code).await?;
        Ok(found)
    }

    async fn list_for_recipe(
        &self,
        recipe_id: &RecipeId,
    ) -> Result<Vec<ShareCode>, ShareCodeError> {
        self.repository.find_by_recipe(recipe_id).await
    }

    async fn delete_share_code(&self, id: &ShareCodeId) -> Result<(), ShareCodeError> {
        self.repository.delete(id).await?;
        tracing::info!(share_code_id = %id, "Share code deleted");
        Ok(())
    }
}
