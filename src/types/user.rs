//! User-related types for the transaction service
//!
//! Users carry a secret credential field that must never leave the service
//! boundary. Redaction is a mandatory post-processing step on every exit
//! path of every operation that returns a user-shaped record.

use serde::{Deserialize, Serialize};

/// User identifier
pub type UserId = u32;

/// Authorization role attached to a user record
///
/// Role gating itself happens in the request layer; the service only
/// carries the role through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user ID (never zero)
    pub id: UserId,

    /// Login name, unique within the store
    pub username: String,

    /// Secret credential; `None` once redacted, and skipped during
    /// serialization so it can never appear on the wire by accident
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Authorization role
    pub role: Role,
}

impl User {
    /// Strip the secret credential field
    ///
    /// Applied by the service to every record before it is returned.
    pub fn redacted(mut self) -> Self {
        self.password = None;
        self
    }
}
