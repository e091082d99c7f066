//! Post use cases: ownership rules, identity checks and pagination.

use std::sync::Arc;

use posts_shared::dto::{CreatePostRequest, UpdatePostRequest};
use posts_shared::response::field_errors;
use validator::Validate;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::pagination::{Page, PageRequest};
use crate::ports::{Clock, IdentityResolver, PostRepository, SystemClock};

/// Post service.
///
/// Caller identity is always passed in explicitly. The service never embeds
/// author details into responses; see [`crate::assembler`].
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, identity: Arc<dyn IdentityResolver>) -> Self {
        Self::with_clock(posts, identity, Arc::new(SystemClock))
    }

    pub fn with_clock(
        posts: Arc<dyn PostRepository>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            identity,
            clock,
        }
    }

    /// Create a post owned by `caller_id`.
    ///
    /// The token is resolved again here and must belong to `caller_id`; the
    /// author snapshot comes from that fresh resolution.
    pub async fn create(
        &self,
        request: CreatePostRequest,
        caller_id: i64,
        token: &str,
    ) -> Result<Post, DomainError> {
        validate(&request)?;

        let identity = self.identity.resolve(token).await?;
        if identity.id != caller_id {
            return Err(DomainError::IdentityMismatch {
                asserted: caller_id,
                resolved: identity.id,
            });
        }

        let post = NewPost::new(request.title, request.content, &identity, self.clock.now());
        Ok(self.posts.create(post).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.load(id).await
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<Post>, DomainError> {
        let posts = self.posts.list_all().await?;
        let total = self.posts.count().await?;

        Ok(Page::paginate(posts, total, request))
    }

    /// Apply a partial update. Only the author may update a post.
    pub async fn update(
        &self,
        id: i64,
        request: UpdatePostRequest,
        caller_id: i64,
    ) -> Result<Post, DomainError> {
        let mut post = self.load(id).await?;
        ensure_author(&post, caller_id)?;
        validate(&request)?;

        post.apply(
            PostPatch {
                title: request.title,
                content: request.content,
            },
            self.clock.now(),
        );

        self.posts.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })
    }

    /// Delete a post. Only the author may delete it.
    pub async fn delete(&self, id: i64, caller_id: i64) -> Result<(), DomainError> {
        let post = self.load(id).await?;
        ensure_author(&post, caller_id)?;

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })
    }

    /// Posts by one author. An unknown author is simply an empty page.
    pub async fn list_by_author(
        &self,
        author_id: i64,
        request: PageRequest,
    ) -> Result<Page<Post>, DomainError> {
        let posts = self.posts.list_by_author(author_id).await?;
        let total = posts.len() as u64;

        Ok(Page::paginate(posts, total, request))
    }

    async fn load(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}

fn ensure_author(post: &Post, caller_id: i64) -> Result<(), DomainError> {
    if post.is_authored_by(caller_id) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

fn validate(request: &impl Validate) -> Result<(), DomainError> {
    request
        .validate()
        .map_err(|e| DomainError::Validation(field_errors(&e)))
}
