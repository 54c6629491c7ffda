// ================
// common/src/auth.rs
// ================
//! Request and response bodies for the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/auth/authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    pub username: String,
    pub password: String,
}

/// Result of an authentication attempt. Failures are encoded in
/// `success`/`message`, never as an HTTP error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserAuth>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<ReplyAttr>,
}

impl AuthenticateResponse {
    /// Soft-failure payload with no user or reply data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
            replies: Vec::new(),
        }
    }
}

/// Authenticated user plus their non-password check attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAuth {
    pub username: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttrValue>,
}

/// A single check attribute returned with an authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttrValue {
    pub attribute: String,
    pub value: String,
}

/// A reply attribute returned on successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyAttr {
    pub attribute: String,
    pub value: String,
}

/// Body of `POST /api/v1/auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub attributes: Vec<AuthAttr>,
    #[serde(default, rename = "reply_attributes")]
    pub reply_attrs: Vec<AuthAttr>,
}

/// One attribute submitted alongside a credential creation. The
/// operator defaults per table when omitted (`:=` for radcheck,
/// `+=` for radreply).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAttr {
    pub attribute: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
}

/// Response of `POST /api/v1/auth`. The `User-Password` entry's value
/// is masked to `"***"`; the top-level password echoes the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthResponse {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub attributes: Vec<CreatedAttr>,
    #[serde(default, rename = "reply_attributes")]
    pub reply_attrs: Vec<CreatedAttr>,
}

/// One row created by `POST /api/v1/auth`, with its assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedAttr {
    pub id: i64,
    pub attribute: String,
    pub value: String,
    pub op: String,
}
