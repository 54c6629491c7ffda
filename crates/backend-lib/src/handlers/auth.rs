// ============================
// radvault-backend-lib/src/handlers/auth.rs
// ============================
//! Authentication endpoints.

use crate::auth::AuthService;
use crate::error::AppError;
use crate::validation;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use radvault_common::{AuthenticateRequest, AuthenticateResponse, CreateAuthRequest};
use serde_json::{json, Value};

pub fn router() -> Router<AuthService> {
    Router::new()
        .route("/", post(create_auth))
        .route("/authenticate", post(authenticate))
}

/// `POST /api/v1/auth/authenticate`
///
/// Always 200 on a well-formed request; failures live in the body.
async fn authenticate(
    State(service): State<AuthService>,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, AppError> {
    validation::validate_authenticate(&req)?;
    Ok(Json(service.authenticate(&req).await))
}

/// `POST /api/v1/auth`
async fn create_auth(
    State(service): State<AuthService>,
    Json(req): Json<CreateAuthRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let result = service.create_auth(&req).await?;
    Ok((StatusCode::CREATED, Json(json!({ "data": result }))))
}
