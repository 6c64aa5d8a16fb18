use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_invite::InviteData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::access_code::AccessCode;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Redeem an invite on behalf of the calling user.
pub async fn use_invite(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(body): Json<UseInviteRequest>,
) -> Result<ApiSuccess<InviteData>, ApiError> {
    state
        .invite_service
        .use_invite(&AccessCode::from_string(body.code), &user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref invite| ApiSuccess::new(StatusCode::OK, invite.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UseInviteRequest {
    code: String,
}
