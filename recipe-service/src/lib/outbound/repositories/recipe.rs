use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::models::RecipeId;
use crate::domain::recipe::models::RecipeSummary;
use crate::domain::recipe::ports::RecipeRepository;

pub struct PostgresRecipeRepository {
    pool: PgPool,
}

impl PostgresRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<RecipeSummary>, RecipeError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, slug, is_published
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RecipeError::DatabaseError(e.to_string()))?;

        let Some(r) = row else {
            return Ok(None);
        };

        let column = |e: sqlx::Error| RecipeError::DatabaseError(e.to_string());

        Ok(Some(RecipeSummary {
            id: RecipeId(r.try_get("id").map_err(column)?),
            title: r.try_get("title").map_err(column)?,
            slug: r.try_get("slug").map_err(column)?,
            is_published: r.try_get("is_published").map_err(column)?,
        }))
    }
}
