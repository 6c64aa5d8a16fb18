use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::get_share_code::ShareCodeWithRecipeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::access_code::AccessCode;
use crate::inbound::http::router::AppState;

/// Redeem one use of a share code and return the recipe it points at.
pub async fn access_recipe(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<ApiSuccess<ShareCodeWithRecipeData>, ApiError> {
    state
        .share_code_service
        .access_recipe(&AccessCode::from_string(code))
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}
