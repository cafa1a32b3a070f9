use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a single blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Canonical path of the post's detail page.
    pub fn absolute_url(&self) -> String {
        post_url(self.id)
    }
}

pub(crate) fn post_url(id: i32) -> String {
    format!("/blog/{id}/")
}

/// Input for creating a post. Timestamps and the id are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub category_id: Option<i32>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i32,
        category_id: Option<i32>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("post title must not be empty".to_string()));
        }

        Ok(Self {
            title,
            content: content.into(),
            author_id,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        let now = Utc::now();
        let post = Post {
            id: 1,
            title: "첫 번째 포스트입니다".to_string(),
            content: "First Post".to_string(),
            author_id: 1,
            category_id: None,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(post.absolute_url(), "/blog/1/");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let result = NewPost::new("", "content", 1, None);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
