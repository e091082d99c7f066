//! # Posts Shared
//!
//! Wire types shared by the service layer and the HTTP boundary:
//! request/response DTOs and the uniform response envelope.

pub mod dto;
pub mod response;

pub use response::{ApiError, ApiResponse, FieldError, ValidationErrors};
