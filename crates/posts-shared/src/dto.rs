//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size accepted from the query string.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 10000,
        message = "content must be between 1 and 10000 characters"
    ))]
    pub content: String,
}

/// Partial update of an existing post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 1,
        max = 10000,
        message = "content must be between 1 and 10000 characters"
    ))]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    /// True if at least one field is set.
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.content.is_some()
    }
}

/// Author details embedded in a post response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A single post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of posts plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

/// Raw `page` / `page_size` query parameters.
///
/// Kept as strings so malformed values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PaginationQuery {
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| (1..=MAX_PAGE_SIZE).contains(p))
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, page_size: Option<&str>) -> PaginationQuery {
        PaginationQuery {
            page: page.map(String::from),
            page_size: page_size.map(String::from),
        }
    }

    #[test]
    fn test_pagination_defaults() {
        let q = query(None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_invalid_values_fall_back() {
        assert_eq!(query(Some("abc"), None).page(), 1);
        assert_eq!(query(Some("0"), None).page(), 1);
        assert_eq!(query(Some("-3"), None).page(), 1);
        assert_eq!(query(None, Some("0")).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(query(None, Some("101")).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(query(None, Some("ten")).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_valid_values() {
        let q = query(Some("3"), Some("100"));
        assert_eq!(q.page(), 3);
        assert_eq!(q.page_size(), 100);
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreatePostRequest {
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            content: "World".to_string(),
        };
        let errors = empty_title.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let long_content = CreatePostRequest {
            title: "T".to_string(),
            content: "x".repeat(10_001),
        };
        assert!(long_content.validate().is_err());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let req = CreatePostRequest {
            title: "é".repeat(255),
            content: "body".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let req = UpdatePostRequest {
            title: None,
            content: Some("new".to_string()),
        };
        assert!(req.validate().is_ok());
        assert!(req.has_changes());
        assert!(!UpdatePostRequest::default().has_changes());

        let bad = UpdatePostRequest {
            title: Some(String::new()),
            content: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_post_response_omits_missing_author() {
        let now = Utc::now();
        let response = PostResponse {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            author_id: 42,
            author: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("author").is_none());
        assert_eq!(value["author_id"], 42);
    }
}
