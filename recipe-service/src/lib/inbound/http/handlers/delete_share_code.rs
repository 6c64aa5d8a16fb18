use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::share_code::errors::ShareCodeError;
use crate::domain::share_code::models::ShareCodeId;
use crate::inbound::http::router::AppState;

pub async fn delete_share_code(
    State(state): State<AppState>,
    Path(share_code_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ShareCodeId::from_string(&share_code_id).map_err(ShareCodeError::from)?;

    state
        .share_code_service
        .delete_share_code(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
