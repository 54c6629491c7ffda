// ============================
// radvault-backend-lib/src/lib.rs
// ============================
//! Core backend functionality for the `RadVault` RADIUS-credential
//! management service: configuration, SQL store, repositories,
//! services and the HTTP surface.

pub mod attrs;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod nas;
pub mod router;
pub mod validation;

use crate::attrs::AttrService;
use crate::auth::AuthService;
use crate::nas::NasService;
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication + transactional credential creation
    pub auth: AuthService,
    /// radcheck CRUD
    pub radcheck: AttrService,
    /// radreply CRUD
    pub radreply: AttrService,
    /// NAS registry CRUD
    pub nas: NasService,
}

impl AppState {
    /// Create a new application state over a connected pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            auth: AuthService::new(pool.clone()),
            radcheck: AttrService::radcheck(pool.clone()),
            radreply: AttrService::radreply(pool.clone()),
            nas: NasService::new(pool),
        }
    }
}
