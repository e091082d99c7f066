//! Application services orchestrating ports.

mod post_service;

pub use post_service::PostService;
