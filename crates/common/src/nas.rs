// ================
// common/src/nas.rs
// ================
//! DTOs for the NAS (network access server) registry endpoints.

use crate::patch::Patch;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/nas`. `nasname` and `secret` are required;
/// everything else falls back to schema defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNasRequest {
    pub nasname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub nas_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<i64>,
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_proxy_state: Option<String>,
}

/// Body of `PUT /api/v1/nas/{id}`. Absent fields stay unchanged;
/// present fields overwrite, including explicit clears to `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNasRequest {
    #[serde(default)]
    pub nasname: Patch<String>,
    #[serde(default)]
    pub shortname: Patch<String>,
    #[serde(default, rename = "type")]
    pub nas_type: Patch<String>,
    #[serde(default)]
    pub ports: Patch<i64>,
    #[serde(default)]
    pub secret: Patch<String>,
    #[serde(default)]
    pub server: Patch<String>,
    #[serde(default)]
    pub community: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub require_ma: Patch<String>,
    #[serde(default)]
    pub limit_proxy_state: Patch<String>,
}

/// A NAS row as returned to callers. Soft-deleted rows never appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NasResponse {
    pub id: i64,
    pub nasname: String,
    pub shortname: String,
    #[serde(rename = "type")]
    pub nas_type: String,
    pub ports: i64,
    pub secret: String,
    pub server: String,
    pub community: String,
    pub description: String,
    pub require_ma: String,
    pub limit_proxy_state: String,
    pub created_at: String,
    pub updated_at: String,
}

/// List-endpoint query parameters; all filters are case-insensitive
/// substring matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NasFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nasname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub nas_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}
