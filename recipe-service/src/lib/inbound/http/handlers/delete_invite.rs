use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::invite::errors::InviteError;
use crate::domain::invite::models::InviteId;
use crate::inbound::http::router::AppState;

pub async fn delete_invite(
    State(state): State<AppState>,
    Path(invite_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = InviteId::from_string(&invite_id).map_err(InviteError::from)?;

    state
        .invite_service
        .delete_invite(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
