//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_JSON", "Invalid request body", err.to_string()).into()
    }))
    // Public routes
    .route("/", web::get().to(health::root))
    .route("/health", web::get().to(health::health_check))
    // Post routes; ids must be numeric to match
    .service(
        web::scope("/api/v1/posts")
            .route("", web::get().to(posts::list_posts))
            .route("", web::post().to(posts::create_post))
            .route(
                "/author/{author_id:[0-9]+}",
                web::get().to(posts::list_posts_by_author),
            )
            .route("/{id:[0-9]+}", web::get().to(posts::get_post))
            .route("/{id:[0-9]+}", web::put().to(posts::update_post))
            .route("/{id:[0-9]+}", web::delete().to(posts::delete_post)),
    );
}
