use serde::Serialize;

use crate::domain::Category;
use crate::error::RepoError;
use crate::ports::Repositories;

/// One line of the categories sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub slug: String,
    pub post_count: u64,
}

/// Category counts shown next to every blog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub categories: Vec<CategoryEntry>,
    /// Posts that belong to no category.
    pub no_category_post_count: u64,
}

impl Sidebar {
    /// Count posts per category. Also returns the categories themselves so
    /// callers can resolve post labels without another query.
    pub(crate) async fn load(repos: &Repositories) -> Result<(Self, Vec<Category>), RepoError> {
        let categories = repos.categories.find_all().await?;
        let counts = repos.posts.count_by_category().await?;
        let no_category_post_count = repos.posts.count_uncategorized().await?;

        let entries = categories
            .iter()
            .map(|category| CategoryEntry {
                name: category.name.clone(),
                slug: category.slug.clone(),
                post_count: counts.get(&category.id).copied().unwrap_or(0),
            })
            .collect();

        Ok((
            Self {
                categories: entries,
                no_category_post_count,
            },
            categories,
        ))
    }
}
