use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post storage.
///
/// Not-found is reported as `Ok(None)` from lookups and as
/// [`RepoError::NotFound`] from writes that target a missing row.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts, ordered by id.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts written by `author_id`, ordered by id.
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Post>, RepoError>;

    /// Replace every column of an existing post.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by its id.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
