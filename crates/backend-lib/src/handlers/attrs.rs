// ============================
// radvault-backend-lib/src/handlers/attrs.rs
// ============================
//! CRUD endpoints shared by `/radcheck` and `/radreply`; the mounted
//! service decides which table the routes operate on.

use crate::attrs::AttrService;
use crate::error::AppError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use radvault_common::{AttrFilter, AttrResponse, CreateAttrRequest, Paginated, UpdateAttrRequest};

pub fn router() -> Router<AttrService> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

async fn create(
    State(service): State<AttrService>,
    Json(req): Json<CreateAttrRequest>,
) -> Result<(StatusCode, Json<AttrResponse>), AppError> {
    let resp = service.create(req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn get_by_id(
    State(service): State<AttrService>,
    Path(id): Path<i64>,
) -> Result<Json<AttrResponse>, AppError> {
    Ok(Json(service.get(id).await?))
}

async fn list(
    State(service): State<AttrService>,
    Query(filter): Query<AttrFilter>,
) -> Result<Json<Paginated<AttrResponse>>, AppError> {
    Ok(Json(service.list(filter).await?))
}

async fn update(
    State(service): State<AttrService>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAttrRequest>,
) -> Result<Json<AttrResponse>, AppError> {
    Ok(Json(service.update(id, req).await?))
}

async fn remove(
    State(service): State<AttrService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
