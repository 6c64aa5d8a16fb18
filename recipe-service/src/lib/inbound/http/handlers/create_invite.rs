use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::invite::models::CreateInviteCommand;
use crate::domain::invite::models::UserInvite;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_invite(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(body): Json<CreateInviteRequest>,
) -> Result<ApiSuccess<InviteData>, ApiError> {
    let command = CreateInviteCommand::new(body.email, &body.role, user.id, body.expires_at)?;

    state
        .invite_service
        .create_invite(command)
        .await
        .map_err(ApiError::from)
        .map(|ref invite| ApiSuccess::new(StatusCode::CREATED, invite.into()))
}

/// HTTP request body for issuing an invite. An omitted role means "user".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateInviteRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: String,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteData {
    pub id: String,
    pub code: String,
    pub email: Option<String>,
    pub role: String,
    pub created_by: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub used_at: Option<DateTime<Utc>>,
    pub used_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&UserInvite> for InviteData {
    fn from(invite: &UserInvite) -> Self {
        Self {
            id: invite.id.to_string(),
            code: invite.code.to_string(),
            email: invite.email.as_ref().map(|e| e.as_str().to_string()),
            role: invite.role.as_str().to_string(),
            created_by: invite.created_by.to_string(),
            expires_at: invite.expires_at,
            used_at: invite.used_at,
            used_by: invite.used_by.map(|id| id.to_string()),
            created_at: invite.created_at,
        }
    }
}
