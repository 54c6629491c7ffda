// ============================
// radvault-backend-lib/src/router.rs
// ============================
//! HTTP router assembly.

use crate::handlers;
use crate::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full API router over the application state.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", handlers::auth::router().with_state(state.auth.clone()))
        .nest(
            "/radcheck",
            handlers::attrs::router().with_state(state.radcheck.clone()),
        )
        .nest(
            "/radreply",
            handlers::attrs::router().with_state(state.radreply.clone()),
        )
        .nest("/nas", handlers::nas::router().with_state(state.nas.clone()));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
