use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::models::RecipeId;
use crate::domain::recipe::models::RecipeSummary;

/// Read access to recipes owned by the recipe catalogue.
#[async_trait]
pub trait RecipeRepository: Send + Sync + 'static {
    /// Retrieve a recipe summary by identifier.
    ///
    /// # Returns
    /// Optional recipe summary (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<RecipeSummary>, RecipeError>;
}
