//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`.
//! This crate contains database access and the identity service client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database driver, in-memory store only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod identity;

// Re-exports
pub use database::InMemoryPostRepository;
pub use identity::{HttpIdentityResolver, IdentityConfig};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostRepository};
