// ================
// common/src/attrs.rs
// ================
//! DTOs for the radcheck and radreply CRUD endpoints. The two tables
//! share one row shape, so a single set of types serves both.

use crate::patch::Patch;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/radcheck` and `POST /api/v1/radreply`.
/// radcheck defaults `op` to `:=` when omitted; radreply requires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttrRequest {
    pub username: String,
    pub attribute: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    pub value: String,
}

/// Body of `PUT /api/v1/radcheck/{id}` and `PUT /api/v1/radreply/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttrRequest {
    #[serde(default)]
    pub username: Patch<String>,
    #[serde(default)]
    pub attribute: Patch<String>,
    #[serde(default)]
    pub op: Patch<String>,
    #[serde(default)]
    pub value: Patch<String>,
}

/// A radcheck or radreply row as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttrResponse {
    pub id: i64,
    pub username: String,
    pub attribute: String,
    pub op: String,
    pub value: String,
}

/// List-endpoint query parameters. `username` and `attribute` are
/// case-insensitive substring filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttrFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}
