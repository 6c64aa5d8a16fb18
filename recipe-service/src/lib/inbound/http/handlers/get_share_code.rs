use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::create_share_code::ShareCodeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::access_code::AccessCode;
use crate::domain::share_code::models::ShareCodeWithRecipe;
use crate::inbound::http::router::AppState;

/// Look up a share code without consuming a use.
pub async fn get_share_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<ApiSuccess<ShareCodeWithRecipeData>, ApiError> {
    state
        .share_code_service
        .get_share_code(&AccessCode::from_string(code))
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCodeWithRecipeData {
    pub share_code: ShareCodeData,
    pub recipe_title: String,
    pub recipe_slug: String,
}

impl From<&ShareCodeWithRecipe> for ShareCodeWithRecipeData {
    fn from(found: &ShareCodeWithRecipe) -> Self {
        Self {
            share_code: (&found.share_code).into(),
            recipe_title: found.recipe_title.clone(),
            recipe_slug: found.recipe_slug.clone(),
        }
    }
}
