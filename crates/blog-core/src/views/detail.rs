use std::collections::HashMap;

use serde::Serialize;

use crate::error::DomainError;
use crate::ports::Repositories;

use super::post_view::PostView;
use super::sidebar::Sidebar;

/// Context of a single post's page.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailContext {
    pub post: PostView,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// Look up one post by id.
///
/// A missing post is `DomainError::NotFound`; the HTTP layer answers 404.
pub async fn post_detail(repos: &Repositories, id: i32) -> Result<PostDetailContext, DomainError> {
    let post = repos
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        })?;

    let authors: HashMap<_, _> = repos
        .authors
        .find_by_id(post.author_id)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    let (sidebar, categories) = Sidebar::load(repos).await?;

    Ok(PostDetailContext {
        post: PostView::new(&post, &authors, &categories)?,
        sidebar,
    })
}
