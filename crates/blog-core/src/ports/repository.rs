use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Author, Category, NewAuthor, NewCategory, NewPost, PageRequest, Post};
use crate::error::RepoError;

/// Generic repository trait defining the standard record operations.
///
/// `N` is the creation input; identifiers are assigned by the store.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All entities in storage order (ascending id).
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity and return it with its assigned id.
    async fn create(&self, input: N) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Delete every entity, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;

    /// Count all entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, NewAuthor, i32> {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError>;

    /// Load the given authors. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Author>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, NewCategory, i32> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;
}

/// Post repository with the aggregates the listing pages need.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    /// Posts ordered by id descending, optionally limited to one page.
    async fn list_newest_first(&self, page: Option<PageRequest>) -> Result<Vec<Post>, RepoError>;

    /// Number of posts without a category.
    async fn count_uncategorized(&self) -> Result<u64, RepoError>;

    /// Number of posts per category id. Categories without posts are absent.
    async fn count_by_category(&self) -> Result<HashMap<i32, u64>, RepoError>;
}
