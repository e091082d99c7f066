//! Domain entities - the core business objects.

mod identity;
mod post;

pub use identity::ResolvedIdentity;
pub use post::{NewPost, Post, PostPatch};
