//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod identity;
mod repository;

pub use clock::{Clock, SystemClock};
pub use identity::{AuthError, IdentityResolver};
pub use repository::PostRepository;
