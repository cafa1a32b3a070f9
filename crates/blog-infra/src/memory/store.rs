//! In-memory blog store - fallback when PostgreSQL is not configured.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{Author, Category, NewAuthor, NewCategory, NewPost, PageRequest, Post};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, CategoryRepository, PostRepository};

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i32, Author>,
    categories: BTreeMap<i32, Category>,
    posts: BTreeMap<i32, Post>,
    last_author_id: i32,
    last_category_id: i32,
    last_post_id: i32,
}

/// In-memory store holding authors, categories and posts behind one async
/// `RwLock`.
///
/// Ids come from per-table counters and are never reused, matching a
/// database sequence. Data is lost on process restart.
pub struct InMemoryBlogStore {
    tables: RwLock<Tables>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, NewAuthor, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.tables.read().await.authors.values().cloned().collect())
    }

    async fn create(&self, input: NewAuthor) -> Result<Author, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.authors.values().any(|a| a.username == input.username) {
            return Err(RepoError::Constraint(format!(
                "username {:?} already exists",
                input.username
            )));
        }

        tables.last_author_id += 1;
        let author = Author {
            id: tables.last_author_id,
            username: input.username,
        };
        tables.authors.insert(author.id, author.clone());

        Ok(author)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.authors.remove(&id).ok_or(RepoError::NotFound)?;

        // Posts require an author.
        tables.posts.retain(|_, post| post.author_id != id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        let removed = tables.authors.len() as u64;
        tables.authors.clear();
        tables.posts.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.tables.read().await.authors.len() as u64)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryBlogStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .authors
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Author>, RepoError> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.authors.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl BaseRepository<Category, NewCategory, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn create(&self, input: NewCategory) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.categories.values().any(|c| c.slug == input.slug) {
            return Err(RepoError::Constraint(format!(
                "slug {:?} already exists",
                input.slug
            )));
        }

        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            name: input.name,
            slug: input.slug,
        };
        tables.categories.insert(category.id, category.clone());

        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.categories.remove(&id).ok_or(RepoError::NotFound)?;

        // The association is optional: orphaned posts become uncategorized.
        for post in tables.posts.values_mut() {
            if post.category_id == Some(id) {
                post.category_id = None;
            }
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        let removed = tables.categories.len() as u64;
        tables.categories.clear();
        for post in tables.posts.values_mut() {
            post.category_id = None;
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.tables.read().await.categories.len() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlogStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().find(|c| c.slug == slug).cloned())
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.tables.read().await.posts.values().cloned().collect())
    }

    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;

        if !tables.authors.contains_key(&input.author_id) {
            return Err(RepoError::Constraint(format!(
                "author {} does not exist",
                input.author_id
            )));
        }
        if let Some(category_id) = input.category_id {
            if !tables.categories.contains_key(&category_id) {
                return Err(RepoError::Constraint(format!(
                    "category {category_id} does not exist"
                )));
            }
        }

        tables.last_post_id += 1;
        let now = Utc::now();
        let post = Post {
            id: tables.last_post_id,
            title: input.title,
            content: input.content,
            author_id: input.author_id,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        };
        tables.posts.insert(post.id, post.clone());

        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.posts.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        let removed = tables.posts.len() as u64;
        tables.posts.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.tables.read().await.posts.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn list_newest_first(&self, page: Option<PageRequest>) -> Result<Vec<Post>, RepoError> {
        let tables = self.tables.read().await;
        let newest_first = tables.posts.values().rev().cloned();

        Ok(match page {
            Some(page) => newest_first
                .skip(page.offset() as usize)
                .take(page.per_page as usize)
                .collect(),
            None => newest_first.collect(),
        })
    }

    async fn count_uncategorized(&self) -> Result<u64, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|p| p.category_id.is_none())
            .count() as u64)
    }

    async fn count_by_category(&self) -> Result<HashMap<i32, u64>, RepoError> {
        let tables = self.tables.read().await;
        let mut counts = HashMap::new();
        for category_id in tables.posts.values().filter_map(|p| p.category_id) {
            *counts.entry(category_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
