use std::sync::Arc;

use blog_core::DomainError;
use blog_core::domain::{NewAuthor, NewCategory, NewPost, PageRequest};
use blog_core::error::RepoError;
use blog_core::ports::Repositories;
use blog_core::views::{post_detail, post_list};

use super::InMemoryBlogStore;

struct Fixture {
    repos: Repositories,
    man: i32,
    woman: i32,
    programming: i32,
    music: i32,
}

async fn fixture() -> Fixture {
    let repos = Repositories::from_store(Arc::new(InMemoryBlogStore::new()));

    let man = repos
        .authors
        .create(NewAuthor::new("man").unwrap())
        .await
        .unwrap();
    let woman = repos
        .authors
        .create(NewAuthor::new("woman").unwrap())
        .await
        .unwrap();
    let programming = repos
        .categories
        .create(NewCategory::new("programming", "programming").unwrap())
        .await
        .unwrap();
    let music = repos
        .categories
        .create(NewCategory::new("music", "music").unwrap())
        .await
        .unwrap();

    Fixture {
        repos,
        man: man.id,
        woman: woman.id,
        programming: programming.id,
        music: music.id,
    }
}

async fn add_post(f: &Fixture, title: &str, author: i32, category: Option<i32>) -> i32 {
    f.repos
        .posts
        .create(NewPost::new(title, "content", author, category).unwrap())
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_post_ids_increase_and_are_not_reused() {
    let f = fixture().await;
    let first = add_post(&f, "first", f.man, None).await;
    let second = add_post(&f, "second", f.man, None).await;
    assert!(second > first);

    f.repos.posts.delete(second).await.unwrap();
    let third = add_post(&f, "third", f.man, None).await;
    assert!(third > second);
}

#[tokio::test]
async fn test_duplicate_slug_is_a_constraint_violation() {
    let f = fixture().await;
    let result = f
        .repos
        .categories
        .create(NewCategory::new("Music again", "music").unwrap())
        .await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_post_requires_existing_author_and_category() {
    let f = fixture().await;

    let missing_author = f
        .repos
        .posts
        .create(NewPost::new("title", "content", 99, None).unwrap())
        .await;
    assert!(matches!(missing_author, Err(RepoError::Constraint(_))));

    let missing_category = f
        .repos
        .posts
        .create(NewPost::new("title", "content", f.man, Some(99)).unwrap())
        .await;
    assert!(matches!(missing_category, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_deleting_category_uncategorizes_its_posts() {
    let f = fixture().await;
    let post_id = add_post(&f, "tune", f.woman, Some(f.music)).await;

    f.repos.categories.delete(f.music).await.unwrap();

    let post = f.repos.posts.find_by_id(post_id).await.unwrap().unwrap();
    assert_eq!(post.category_id, None);
    assert_eq!(f.repos.posts.count_uncategorized().await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_author_deletes_their_posts() {
    let f = fixture().await;
    add_post(&f, "a", f.man, None).await;
    add_post(&f, "b", f.woman, None).await;

    f.repos.authors.delete(f.man).await.unwrap();

    assert_eq!(f.repos.posts.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let f = fixture().await;
    let result = f.repos.posts.delete(42).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_post_list_context() {
    let f = fixture().await;
    let first = add_post(&f, "첫 번째 포스트입니다", f.man, Some(f.programming)).await;
    let second = add_post(&f, "두 번째 포스트입니다", f.woman, Some(f.music)).await;
    let third = add_post(&f, "세 번째 포스트입니다", f.woman, None).await;

    let context = post_list(&f.repos, None).await.unwrap();

    let ids: Vec<i32> = context.object_list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![third, second, first]);
    assert_eq!(context.sidebar.no_category_post_count, 1);
    assert!(context.pagination.is_none());

    let counts: Vec<(&str, u64)> = context
        .sidebar
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.post_count))
        .collect();
    assert_eq!(counts, vec![("programming", 1), ("music", 1)]);

    assert_eq!(context.object_list[0].author, "woman");
    assert!(context.object_list[0].category.is_none());
    assert_eq!(
        context.object_list[2].category.as_ref().map(|c| c.name.as_str()),
        Some("programming")
    );
}

#[tokio::test]
async fn test_uncategorized_count_matches_posts_without_category() {
    let f = fixture().await;
    for i in 0..5 {
        add_post(&f, &format!("post {i}"), f.man, None).await;
    }
    add_post(&f, "categorized", f.man, Some(f.music)).await;

    let context = post_list(&f.repos, None).await.unwrap();
    assert_eq!(context.sidebar.no_category_post_count, 5);
}

#[tokio::test]
async fn test_empty_category_shows_zero() {
    let f = fixture().await;
    let context = post_list(&f.repos, None).await.unwrap();

    assert!(context.object_list.is_empty());
    assert!(context.sidebar.categories.iter().all(|c| c.post_count == 0));
}

#[tokio::test]
async fn test_paginated_post_list() {
    let f = fixture().await;
    for i in 1..=5 {
        add_post(&f, &format!("post {i}"), f.man, None).await;
    }

    let context = post_list(&f.repos, Some(PageRequest::new(2, 2))).await.unwrap();
    let titles: Vec<&str> = context.object_list.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["post 3", "post 2"]);

    let pagination = context.pagination.unwrap();
    assert_eq!(pagination.num_pages, 3);
    assert!(pagination.has_next);

    let result = post_list(&f.repos, Some(PageRequest::new(4, 2))).await;
    assert!(matches!(result, Err(DomainError::PageNotFound(4))));
}

#[tokio::test]
async fn test_post_detail_context() {
    let f = fixture().await;
    let id = add_post(&f, "첫 번째 포스트입니다", f.man, None).await;

    let context = post_detail(&f.repos, id).await.unwrap();

    assert_eq!(context.post.title, "첫 번째 포스트입니다");
    assert_eq!(context.post.author, "man");
    assert_eq!(context.post.url, format!("/blog/{id}/"));
    assert_eq!(context.sidebar.no_category_post_count, 1);
}

#[tokio::test]
async fn test_post_detail_missing_post() {
    let f = fixture().await;
    let result = post_detail(&f.repos, 404).await;

    assert!(matches!(
        result,
        Err(DomainError::NotFound {
            entity_type: "Post",
            ..
        })
    ));
}
