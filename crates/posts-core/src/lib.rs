//! # Posts Core
//!
//! The domain layer of the Posts API.
//! Entities, ports, pagination and the post service live here; nothing in
//! this crate knows about HTTP servers or SQL drivers.

pub mod assembler;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use pagination::{Page, PageRequest};
pub use service::PostService;
