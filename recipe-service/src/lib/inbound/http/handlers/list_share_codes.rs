use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_share_code::ShareCodeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::RecipeId;
use crate::domain::share_code::errors::ShareCodeError;
use crate::inbound::http::router::AppState;

pub async fn list_share_codes(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<Vec<ShareCodeData>>, ApiError> {
    let recipe_id = RecipeId::from_string(&recipe_id).map_err(ShareCodeError::from)?;

    state
        .share_code_service
        .list_for_recipe(&recipe_id)
        .await
        .map_err(ApiError::from)
        .map(|share_codes| {
            ApiSuccess::new(
                StatusCode::OK,
                share_codes.iter().map(ShareCodeData::from).collect(),
            )
        })
}
