//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::Repositories;
use blog_infra::InMemoryBlogStore;
use blog_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::{PostgresAuthorRepository, PostgresCategoryRepository, PostgresPostRepository};

use crate::config::AppConfig;
use crate::render::Templates;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub templates: Arc<Templates>,
    pub page_size: Option<u64>,
}

impl AppState {
    /// Build the application state, connecting to the database if configured.
    pub async fn new(config: &AppConfig, templates: Templates) -> Self {
        let repos = repositories(config.database.as_ref()).await;
        tracing::info!("Application state initialized");

        Self::with_repositories(repos, templates, config.page_size)
    }

    pub fn with_repositories(
        repos: Repositories,
        templates: Templates,
        page_size: Option<u64>,
    ) -> Self {
        Self {
            repos,
            templates: Arc::new(templates),
            page_size,
        }
    }
}

fn in_memory() -> Repositories {
    Repositories::from_store(Arc::new(InMemoryBlogStore::new()))
}

#[cfg(feature = "postgres")]
async fn repositories(db_config: Option<&DatabaseConfig>) -> Repositories {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    match blog_infra::database::connect(config).await {
        Ok(conn) => Repositories {
            authors: Arc::new(PostgresAuthorRepository::new(conn.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(conn.clone())),
            posts: Arc::new(PostgresPostRepository::new(conn)),
        },
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_db_config: Option<&DatabaseConfig>) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory store");
    in_memory()
}
