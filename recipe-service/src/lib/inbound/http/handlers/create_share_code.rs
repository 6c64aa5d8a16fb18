use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::RecipeId;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::models::CreateShareCodeCommand;
use crate::domain::share_code::models::ShareCode;
use crate::inbound::http::router::AppState;

pub async fn create_share_code(
    State(state): State<AppState>,
    Json(body): Json<CreateShareCodeRequest>,
) -> Result<ApiSuccess<ShareCodeData>, ApiError> {
    state
        .share_code_service
        .create_share_code(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref share_code| ApiSuccess::new(StatusCode::CREATED, share_code.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateShareCodeRequest {
    recipe_id: String,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    max_uses: Option<i32>,
}

impl CreateShareCodeRequest {
    fn try_into_command(self) -> Result<CreateShareCodeCommand, ShareCodeError> {
        let recipe_id = RecipeId::from_string(&self.recipe_id)?;
        CreateShareCodeCommand::new(recipe_id, self.expires_at, self.max_uses)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCodeData {
    pub id: String,
    pub recipe_id: String,
    pub code: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&ShareCode> for ShareCodeData {
    fn from(share_code: &ShareCode) -> Self {
        Self {
            id: share_code.id.to_string(),
            recipe_id: share_code.recipe_id.to_string(),
            code: share_code.code.to_string(),
            expires_at: share_code.expires_at,
            max_uses: share_code.max_uses,
            use_count: share_code.use_count,
            created_at: share_code.created_at,
        }
    }
}
