//! Identity service clients.

mod http;

pub use http::{HttpIdentityResolver, IdentityConfig, MAX_TIMEOUT};
