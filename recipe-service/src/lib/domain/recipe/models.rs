use std::fmt;

use uuid::Uuid;

use crate::domain::recipe::errors::RecipeIdError;

/// Recipe unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a recipe ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RecipeIdError> {
        Uuid::parse_str(s)
            .map(RecipeId)
            .map_err(|e| RecipeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read-only view of a recipe, as far as sharing is concerned.
///
/// Recipes are authored and published elsewhere; this service only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
}
