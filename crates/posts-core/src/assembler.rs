//! Shapes stored posts into API responses.
//!
//! The `author` object is only embedded when the viewer wrote the post; the
//! viewer's own identity is the only live source of author details.

use posts_shared::dto::{AuthorData, PostListResponse, PostResponse};

use crate::domain::{Post, ResolvedIdentity};
use crate::pagination::Page;

/// Convert a post, embedding author details if `viewer` wrote it.
pub fn assemble(post: &Post, viewer: Option<&ResolvedIdentity>) -> PostResponse {
    let author = viewer
        .filter(|v| post.is_authored_by(v.id))
        .map(|v| author_for_viewer(post, v));

    PostResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author_id: post.author_id,
        author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// Convert a page of posts with the same viewer rules as [`assemble`].
pub fn assemble_page(page: &Page<Post>, viewer: Option<&ResolvedIdentity>) -> PostListResponse {
    PostListResponse {
        posts: page.items.iter().map(|p| assemble(p, viewer)).collect(),
        total_count: page.total_count,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }
}

/// Author details captured on the post at creation, if both fields were set.
pub fn author_from_snapshot(post: &Post) -> Option<AuthorData> {
    if post.author_name.is_empty() || post.author_email.is_empty() {
        return None;
    }

    Some(AuthorData {
        id: post.author_id,
        username: post.author_name.clone(),
        email: post.author_email.clone(),
    })
}

// Live identity wins; blank fields fall back to the snapshot author.
fn author_for_viewer(post: &Post, viewer: &ResolvedIdentity) -> AuthorData {
    let snapshot = author_from_snapshot(post);
    let pick = |live: &str, fallback: Option<&str>| {
        if live.is_empty() {
            fallback.unwrap_or_default().to_string()
        } else {
            live.to_string()
        }
    };

    AuthorData {
        id: viewer.id,
        username: pick(&viewer.name, snapshot.as_ref().map(|a| a.username.as_str())),
        email: pick(&viewer.email, snapshot.as_ref().map(|a| a.email.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageRequest;
    use chrono::Utc;

    fn post(author_id: i64) -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            author_id,
            author_name: "Old Name".to_string(),
            author_email: "old@x.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn viewer(id: i64, name: &str) -> ResolvedIdentity {
        ResolvedIdentity {
            id,
            name: name.to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_anonymous_viewer_gets_no_author() {
        let response = assemble(&post(42), None);

        assert!(response.author.is_none());
        assert_eq!(response.author_id, 42);
    }

    #[test]
    fn test_other_viewer_gets_no_author() {
        let response = assemble(&post(42), Some(&viewer(7, "Bob")));
        assert!(response.author.is_none());
    }

    #[test]
    fn test_author_viewer_overrides_snapshot() {
        let response = assemble(&post(42), Some(&viewer(42, "Alice")));

        assert_eq!(
            response.author,
            Some(AuthorData {
                id: 42,
                username: "Alice".to_string(),
                email: "a@x.com".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_viewer_name_falls_back_to_snapshot() {
        let response = assemble(&post(42), Some(&viewer(42, "")));
        assert_eq!(response.author.unwrap().username, "Old Name");
    }

    #[test]
    fn test_blank_viewer_without_snapshot_stays_blank() {
        let mut anonymous = post(42);
        anonymous.author_email.clear();

        let author = assemble(&anonymous, Some(&viewer(42, ""))).author.unwrap();
        assert_eq!(author.username, "");
        assert_eq!(author.email, "a@x.com");
    }

    #[test]
    fn test_snapshot_author_requires_both_fields() {
        assert!(author_from_snapshot(&post(1)).is_some());

        let mut anonymous = post(1);
        anonymous.author_email.clear();
        assert!(author_from_snapshot(&anonymous).is_none());
    }

    #[test]
    fn test_assemble_page_only_marks_own_posts() {
        let page = Page::paginate(vec![post(42), post(7)], 2, PageRequest::default());
        let response = assemble_page(&page, Some(&viewer(42, "Alice")));

        assert!(response.posts[0].author.is_some());
        assert!(response.posts[1].author.is_none());
        assert_eq!(response.total_pages, 1);
    }
}
