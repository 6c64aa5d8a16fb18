use thiserror::Error;

/// Error for RecipeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for recipe lookups
#[derive(Debug, Clone, Error)]
pub enum RecipeError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
