use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category entity - an optional grouping of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// URL-safe identifier, unique across categories.
    pub slug: String,
}

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    /// Validate and build a category input.
    ///
    /// Slugs may hold any Unicode letters or digits plus `-` and `_`, so
    /// non-Latin category names can keep a readable slug.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let slug = slug.into();

        if name.trim().is_empty() {
            return Err(DomainError::Validation("category name must not be empty".to_string()));
        }
        if !is_valid_slug(&slug) {
            return Err(DomainError::Validation(format!("invalid slug: {slug:?}")));
        }

        Ok(Self { name, slug })
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
