use thiserror::Error;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserError;

/// Error for InviteId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InviteIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for invite operations
#[derive(Debug, Clone, Error)]
pub enum InviteError {
    #[error("Invalid invite ID: {0}")]
    InvalidInviteId(#[from] InviteIdError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invite not found: {0}")]
    NotFound(String),

    #[error("Invite has already been used")]
    AlreadyUsed,

    #[error("Invite has expired")]
    Expired,

    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for InviteError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DatabaseError(msg) => InviteError::DatabaseError(msg),
            other => InviteError::Unknown(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for InviteError {
    fn from(err: anyhow::Error) -> Self {
        InviteError::Unknown(err.to_string())
    }
}
