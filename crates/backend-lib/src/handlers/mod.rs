// ============================
// radvault-backend-lib/src/handlers/mod.rs
// ============================
//! HTTP handlers for the `RadVault` API surface.

pub mod attrs;
pub mod auth;
pub mod nas;

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
