use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::invite::errors::InviteError;
use crate::domain::share_code::errors::ShareCodeError;
use crate::user::errors::UserError;

pub mod access_recipe;
pub mod create_invite;
pub mod create_share_code;
pub mod current_user;
pub mod delete_invite;
pub mod delete_share_code;
pub mod get_invite;
pub mod get_share_code;
pub mod health;
pub mod list_invites;
pub mod list_share_codes;
pub mod login;
pub mod refresh;
pub mod register;
pub mod use_invite;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    Gone(String),
}

impl ApiError {
    /// Log the cause and hide it from the client.
    fn internal(cause: impl Display) -> Self {
        tracing::error!(error = %cause, "Request failed");
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Gone(msg) => (StatusCode::GONE, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials | UserError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::Unauthorized { .. } => ApiError::Forbidden(err.to_string()),
            UserError::InvalidEmail(_) | UserError::InvalidPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => ApiError::internal(err),
        }
    }
}

impl From<ShareCodeError> for ApiError {
    fn from(err: ShareCodeError) -> Self {
        match err {
            ShareCodeError::InvalidShareCodeId(_) | ShareCodeError::InvalidRecipeId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ShareCodeError::InvalidMaxUses(_) | ShareCodeError::RecipeNotPublished(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ShareCodeError::RecipeNotFound(_) | ShareCodeError::NotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ShareCodeError::MaxUsesReached | ShareCodeError::Expired => {
                ApiError::Gone(err.to_string())
            }
            ShareCodeError::DatabaseError(_) | ShareCodeError::Unknown(_) => {
                ApiError::internal(err)
            }
        }
    }
}

impl From<InviteError> for ApiError {
    fn from(err: InviteError) -> Self {
        match err {
            InviteError::InvalidInviteId(_) => ApiError::BadRequest(err.to_string()),
            InviteError::InvalidRole(_) | InviteError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            InviteError::NotFound(_) => ApiError::NotFound(err.to_string()),
            InviteError::AlreadyUsed | InviteError::EmailAlreadyRegistered(_) => {
                ApiError::Conflict(err.to_string())
            }
            InviteError::Expired => ApiError::Gone(err.to_string()),
            InviteError::DatabaseError(_) | InviteError::Unknown(_) => ApiError::internal(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
