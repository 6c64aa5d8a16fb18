use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::access_code::AccessCode;
use crate::domain::recipe::models::RecipeId;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::models::ShareCode;
use crate::domain::share_code::models::ShareCodeId;
use crate::domain::share_code::models::ShareCodeWithRecipe;
use crate::domain::share_code::ports::ShareCodeRepository;

pub struct PostgresShareCodeRepository {
    pool: PgPool,
}

impl PostgresShareCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_share_code(row: &PgRow) -> Result<ShareCode, ShareCodeError> {
        let column = |e: sqlx::Error| ShareCodeError::DatabaseError(e.to_string());
        let code: String = row.try_get("code").map_err(column)?;

        Ok(ShareCode {
            id: ShareCodeId(row.try_get("id").map_err(column)?),
            recipe_id: RecipeId(row.try_get("recipe_id").map_err(column)?),
            code: AccessCode::from_string(code),
            expires_at: row.try_get("expires_at").map_err(column)?,
            max_uses: row.try_get("max_uses").map_err(column)?,
            use_count: row.try_get("use_count").map_err(column)?,
            created_at: row.try_get("created_at").map_err(column)?,
        })
    }
}

#[async_trait]
impl ShareCodeRepository for PostgresShareCodeRepository {
    async fn create(&self, share_code: ShareCode) -> Result<ShareCode, ShareCodeError> {
        sqlx::query(
            r#"
            INSERT INTO share_codes (id, recipe_id, code, expires_at, max_uses, use_count, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(share_code.id.0)
        .bind(share_code.recipe_id.0)
        .bind(share_code.code.as_str())
        .bind(share_code.expires_at)
        .bind(share_code.max_uses)
        .bind(share_code.use_count)
        .bind(share_code.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ShareCodeError::DatabaseError(e.to_string()))?;

        Ok(share_code)
    }

    async fn find_by_code(
        &self,
        code: &AccessCode,
    ) -> Result<Option<ShareCodeWithRecipe>, ShareCodeError> {
        let row = sqlx::query(
            r#"
            SELECT sc.id, sc.recipe_id, sc.code, sc.expires_at, sc.max_uses, sc.use_count,
                   sc.created_at, r.title AS recipe_title, r.slug AS recipe_slug
            FROM share_codes sc
            JOIN recipes r ON r.id = sc.recipe_id
            WHERE sc.code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ShareCodeError::DatabaseError(e.to_string()))?;

        let Some(r) = row else {
            return Ok(None);
        };

        let column = |e: sqlx::Error| ShareCodeError::DatabaseError(e.to_string());
        Ok(Some(ShareCodeWithRecipe {
            share_code: Self::row_to_share_code(&r)?,
            recipe_title: r.try_get("recipe_title").map_err(column)?,
            recipe_slug: r.try_get("recipe_slug").map_err(column)?,
        }))
    }

    async fn find_by_recipe(&self, recipe_id: &RecipeId) -> Result<Vec<ShareCode>, ShareCodeError> {
        let rows = sqlx::query(
            r#"
            SELECT id, recipe_id, code, expires_at, max_uses, use_count, created_at
            FROM share_codes
            WHERE recipe_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(recipe_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ShareCodeError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_share_code).collect()
    }

    async fn increment_use(
        &self,
        id: &ShareCodeId,
        now: DateTime<Utc>,
    ) -> Result<bool, ShareCodeError> {
        let result = sqlx::query(
            r#"
            UPDATE share_codes
            SET use_count = use_count + 1
            WHERE id = $1
              AND (max_uses IS NULL OR use_count < max_uses)
              AND (expires_at IS NULL OR expires_at >= $2)
            "#,
        )
        .bind(id.0)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| ShareCodeError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: &ShareCodeId) -> Result<(), ShareCodeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM share_codes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ShareCodeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ShareCodeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
