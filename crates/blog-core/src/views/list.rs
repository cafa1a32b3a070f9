use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{PageRequest, Pagination};
use crate::error::DomainError;
use crate::ports::Repositories;

use super::post_view::PostView;
use super::sidebar::Sidebar;

/// Context of the post listing page.
#[derive(Debug, Clone, Serialize)]
pub struct PostListContext {
    /// Posts, newest first.
    pub object_list: Vec<PostView>,
    #[serde(flatten)]
    pub sidebar: Sidebar,
    /// Present only when the listing is paginated.
    pub pagination: Option<Pagination>,
}

/// Build the listing context: every post newest first (or one page of them)
/// plus the category sidebar.
pub async fn post_list(
    repos: &Repositories,
    page: Option<PageRequest>,
) -> Result<PostListContext, DomainError> {
    let pagination = match page {
        Some(request) => {
            let total = repos.posts.count().await?;
            let pagination = Pagination::resolve(request, total)
                .ok_or(DomainError::PageNotFound(request.page))?;
            Some(pagination)
        }
        None => None,
    };

    let posts = repos.posts.list_newest_first(page).await?;
    let (sidebar, categories) = Sidebar::load(repos).await?;

    let mut author_ids: Vec<i32> = posts.iter().map(|p| p.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let authors: HashMap<_, _> = repos
        .authors
        .find_by_ids(&author_ids)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    let object_list = posts
        .iter()
        .map(|post| PostView::new(post, &authors, &categories))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostListContext {
        object_list,
        sidebar,
        pagination,
    })
}
