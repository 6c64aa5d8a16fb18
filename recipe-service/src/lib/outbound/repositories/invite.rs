use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::access_code::AccessCode;
use crate::domain::invite::errors::InviteError;
use crate::domain::invite::models::InviteId;
use crate::domain::invite::models::UserInvite;
use crate::domain::invite::ports::InviteRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

pub struct PostgresInviteRepository {
    pool: PgPool,
}

impl PostgresInviteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_invite(row: &PgRow) -> Result<UserInvite, InviteError> {
        let column = |e: sqlx::Error| InviteError::DatabaseError(e.to_string());
        let code: String = row.try_get("code").map_err(column)?;
        let email: Option<String> = row.try_get("email").map_err(column)?;
        let role: String = row.try_get("role").map_err(column)?;
        let used_by: Option<Uuid> = row.try_get("used_by").map_err(column)?;

        Ok(UserInvite {
            id: InviteId(row.try_get("id").map_err(column)?),
            code: AccessCode::from_string(code),
            email: email
                .map(EmailAddress::new)
                .transpose()
                .map_err(|e| InviteError::DatabaseError(format!("Stored email invalid: {}", e)))?,
            role: role
                .parse::<Role>()
                .map_err(|e| InviteError::DatabaseError(format!("Stored role invalid: {}", e)))?,
            created_by: UserId(row.try_get("created_by").map_err(column)?),
            expires_at: row.try_get("expires_at").map_err(column)?,
            used_at: row.try_get("used_at").map_err(column)?,
            used_by: used_by.map(UserId),
            created_at: row.try_get("created_at").map_err(column)?,
        })
    }
}

#[async_trait]
impl InviteRepository for PostgresInviteRepository {
    async fn create(&self, invite: UserInvite) -> Result<UserInvite, InviteError> {
        sqlx::query(
            r#"
            INSERT INTO user_invites (id, code, email, role, created_by, expires_at, used_at, used_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(invite.id.0)
        .bind(invite.code.as_str())
        .bind(invite.email.as_ref().map(|e| e.as_str()))
        .bind(invite.role.as_str())
        .bind(invite.created_by.0)
        .bind(invite.expires_at)
        .bind(invite.used_at)
        .bind(invite.used_by.map(|u| u.0))
        .bind(invite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        Ok(invite)
    }

    async fn find_by_code(&self, code: &AccessCode) -> Result<Option<UserInvite>, InviteError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, email, role, created_by, expires_at, used_at, used_by, created_at
            FROM user_invites
            WHERE code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_invite).transpose()
    }

    async fn list_all(&self) -> Result<Vec<UserInvite>, InviteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, email, role, created_by, expires_at, used_at, used_by, created_at
            FROM user_invites
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_invite).collect()
    }

    async fn mark_used(
        &self,
        id: &InviteId,
        used_by: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Option<UserInvite>, InviteError> {
        let row = sqlx::query(
            r#"
            UPDATE user_invites
            SET used_at = $3, used_by = $2
            WHERE id = $1
              AND used_at IS NULL
              AND (expires_at IS NULL OR expires_at >= $3)
            RETURNING id, code, email, role, created_by, expires_at, used_at, used_by, created_at
            "#,
        )
        .bind(id.0)
        .bind(used_by.0)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_invite).transpose()
    }

    async fn delete(&self, id: &InviteId) -> Result<(), InviteError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_invites
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(InviteError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
