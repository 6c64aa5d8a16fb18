use thiserror::Error;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::errors::RecipeIdError;

/// Error for ShareCodeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareCodeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for share code operations
#[derive(Debug, Clone, Error)]
pub enum ShareCodeError {
    #[error("Invalid share code ID: {0}")]
    InvalidShareCodeId(#[from] ShareCodeIdError),

    #[error("Invalid recipe ID: {0}")]
    InvalidRecipeId(#[from] RecipeIdError),

    #[error("Invalid max uses: {0} (must be at least 1)")]
    InvalidMaxUses(i32),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Can only share published recipes: {0}")]
    RecipeNotPublished(String),

    #[error("Share code not found: {0}")]
    NotFound(String),

    #[error("Share code has reached maximum uses")]
    MaxUsesReached,

    #[error("Share code has expired")]
    Expired,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<RecipeError> for ShareCodeError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::DatabaseError(msg) => ShareCodeError::DatabaseError(msg),
        }
    }
}

impl From<anyhow::Error> for ShareCodeError {
    fn from(err: anyhow::Error) -> Self {
        ShareCodeError::Unknown(err.to_string())
    }
}
