use axum::extract::State;
use axum::http::StatusCode;

use super::create_invite::InviteData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_invites(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<InviteData>>, ApiError> {
    state
        .invite_service
        .list_invites()
        .await
        .map_err(ApiError::from)
        .map(|invites| {
            ApiSuccess::new(
                StatusCode::OK,
                invites.iter().map(InviteData::from).collect(),
            )
        })
}
