use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::ResolvedIdentity;

/// Post entity - a persisted article owned by a single author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// Author name at creation time; not kept in sync afterwards.
    pub author_name: String,
    /// Author email at creation time; not kept in sync afterwards.
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update and bump `updated_at`.
    ///
    /// `updated_at` never moves backwards and always advances by at least
    /// one microsecond, the resolution of the backing column.
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = now.max(self.updated_at + TimeDelta::microseconds(1));
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Build a post authored by `author`, snapshotting its name and email.
    pub fn new(
        title: String,
        content: String,
        author: &ResolvedIdentity,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            content,
            author_id: author.id,
            author_name: author.name.clone(),
            author_email: author.email.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a store-assigned id.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            author_name: self.author_name,
            author_email: self.author_email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields to change on an existing post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
