use serde::{Deserialize, Serialize};

/// Caller identity as reported by the external identity authority.
///
/// Obtained fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}
