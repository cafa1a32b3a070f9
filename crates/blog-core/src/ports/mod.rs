//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

use std::sync::Arc;

mod repository;

pub use repository::{AuthorRepository, BaseRepository, CategoryRepository, PostRepository};

/// The set of repositories a request handler works with.
#[derive(Clone)]
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Repositories {
    /// Use one store for all three record types.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: AuthorRepository + CategoryRepository + PostRepository + 'static,
    {
        Self {
            authors: store.clone(),
            categories: store.clone(),
            posts: store,
        }
    }
}
