//! Post handlers.

use actix_web::{HttpResponse, web};

use posts_core::PageRequest;
use posts_core::assembler::{assemble, assemble_page};
use posts_shared::ApiResponse;
use posts_shared::dto::{CreatePostRequest, PaginationQuery, UpdatePostRequest};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn page_request(query: &PaginationQuery) -> PageRequest {
    PageRequest::new(query.page(), query.page_size())
}

/// GET /api/v1/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    query: web::Query<PaginationQuery>,
) -> AppResult<HttpResponse> {
    let page = state.posts.list(page_request(&query)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Posts retrieved successfully",
        assemble_page(&page, viewer.user()),
    )))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post retrieved successfully",
        assemble(&post, viewer.user()),
    )))
}

/// GET /api/v1/posts/author/{author_id}
pub async fn list_posts_by_author(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    path: web::Path<i64>,
    query: web::Query<PaginationQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .list_by_author(path.into_inner(), page_request(&query))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Author posts retrieved successfully",
        assemble_page(&page, viewer.user()),
    )))
}

/// POST /api/v1/posts
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create(body.into_inner(), identity.user_id(), &identity.token)
        .await?;

    tracing::info!(post_id = post.id, author_id = post.author_id, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Post created successfully",
        assemble(&post, None),
    )))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if !req.has_changes() {
        return Err(AppError::bad_request(
            "NO_CHANGES",
            "No fields to update",
            "Provide at least one of title or content",
        ));
    }

    let post = state
        .posts
        .update(path.into_inner(), req, identity.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post updated successfully",
        assemble(&post, Some(&identity.user)),
    )))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id, identity.user_id()).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty("Post deleted successfully")))
}
