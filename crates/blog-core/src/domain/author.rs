use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author entity - the account a post is written by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub username: String,
}

/// Input for creating an author. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub username: String,
}

impl NewAuthor {
    pub fn new(username: impl Into<String>) -> Result<Self, DomainError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::Validation("username must not be empty".to_string()));
        }
        Ok(Self { username })
    }
}
