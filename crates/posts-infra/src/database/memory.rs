//! In-memory post store - used when no database is configured and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// In-memory post repository backed by a `BTreeMap` behind an async RwLock.
///
/// Ids increase monotonically and are never reused.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let post = post.into_post(store.last_id);
        store.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let row = store.rows.get_mut(&post.id).ok_or(RepoError::NotFound)?;
        *row = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use posts_core::domain::ResolvedIdentity;

    fn new_post(author_id: i64, title: &str) -> NewPost {
        let author = ResolvedIdentity {
            id: author_id,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
        };
        NewPost::new(title.to_string(), "body".to_string(), &author, Utc::now())
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(new_post(1, "a")).await.unwrap();
        let second = repo.create(new_post(1, "b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(new_post(1, "a")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(new_post(1, "b")).await.unwrap();

        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_by_author_filters() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post(1, "a")).await.unwrap();
        repo.create(new_post(2, "b")).await.unwrap();
        repo.create(new_post(1, "c")).await.unwrap();

        let titles: Vec<_> = repo
            .list_by_author(1)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["a", "c"]);
        assert!(repo.list_by_author(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let repo = InMemoryPostRepository::new();
        let ghost = new_post(1, "ghost").into_post(9);

        assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(9).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.create(new_post(1, "a")).await.unwrap();

        post.title = "changed".to_string();
        repo.update(post.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
    }
}
