use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Author, Category, Post};
use crate::error::RepoError;

/// Category name and slug attached to a rendered post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLabel {
    pub name: String,
    pub slug: String,
}

/// A post with its author and category resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    /// `None` renders as the uncategorized label.
    pub category: Option<CategoryLabel>,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

impl PostView {
    pub(crate) fn new(
        post: &Post,
        authors: &HashMap<i32, Author>,
        categories: &[Category],
    ) -> Result<Self, RepoError> {
        let author = authors.get(&post.author_id).ok_or_else(|| {
            RepoError::Query(format!(
                "post {} references missing author {}",
                post.id, post.author_id
            ))
        })?;

        let category = post
            .category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| CategoryLabel {
                name: c.name.clone(),
                slug: c.slug.clone(),
            });

        Ok(Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: author.username.clone(),
            category,
            url: post.absolute_url(),
            created_at: post.created_at.format(DATE_FORMAT).to_string(),
            updated_at: post.updated_at.format(DATE_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn post(category_id: Option<i32>) -> Post {
        let now = Utc::now();
        Post {
            id: 7,
            title: "title".to_string(),
            content: "content".to_string(),
            author_id: 1,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn authors() -> HashMap<i32, Author> {
        HashMap::from([(
            1,
            Author {
                id: 1,
                username: "man".to_string(),
            },
        )])
    }

    #[test]
    fn test_resolves_author_and_category() {
        let categories = vec![Category {
            id: 3,
            name: "music".to_string(),
            slug: "music".to_string(),
        }];

        let view = PostView::new(&post(Some(3)), &authors(), &categories).unwrap();

        assert_eq!(view.author, "man");
        assert_eq!(view.category.unwrap().name, "music");
        assert_eq!(view.url, "/blog/7/");
    }

    #[test]
    fn test_uncategorized_post_has_no_label() {
        let view = PostView::new(&post(None), &authors(), &[]).unwrap();
        assert!(view.category.is_none());
    }

    #[test]
    fn test_missing_author_is_an_error() {
        let result = PostView::new(&post(None), &HashMap::new(), &[]);
        assert!(matches!(result, Err(RepoError::Query(_))));
    }
}
