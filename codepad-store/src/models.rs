//! Wire shapes for session requests
//!
//! Field names follow the existing client contract: the discriminator is
//! upper-case, the id arrives as `sessionId`.

use serde::{Deserialize, Serialize};

/// CRUD discriminator carried by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Method {
    Create,
    Read,
    Update,
    Delete,
}

/// One session operation: a method, the target id, and the optional
/// fields consumed by UPDATE.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub method: Method,
    pub session_id: String,
    pub text: Option<String>,
    pub syntax: Option<String>,
}

impl SessionRequest {
    pub fn new(method: Method, session_id: impl Into<String>) -> Self {
        Self {
            method,
            session_id: session_id.into(),
            text: None,
            syntax: None,
        }
    }
}
