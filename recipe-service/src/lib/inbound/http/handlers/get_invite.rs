use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_invite::InviteData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::access_code::AccessCode;
use crate::inbound::http::router::AppState;

pub async fn get_invite(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<ApiSuccess<InviteData>, ApiError> {
    state
        .invite_service
        .get_invite(&AccessCode::from_string(code))
        .await
        .map_err(ApiError::from)
        .map(|ref invite| ApiSuccess::new(StatusCode::OK, invite.into()))
}
