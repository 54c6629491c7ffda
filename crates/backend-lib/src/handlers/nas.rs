// ============================
// radvault-backend-lib/src/handlers/nas.rs
// ============================
//! NAS registry endpoints.

use crate::error::AppError;
use crate::nas::NasService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use radvault_common::{CreateNasRequest, NasFilter, NasResponse, Paginated, UpdateNasRequest};

pub fn router() -> Router<NasService> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

async fn create(
    State(service): State<NasService>,
    Json(req): Json<CreateNasRequest>,
) -> Result<(StatusCode, Json<NasResponse>), AppError> {
    let resp = service.create(req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn get_by_id(
    State(service): State<NasService>,
    Path(id): Path<i64>,
) -> Result<Json<NasResponse>, AppError> {
    Ok(Json(service.get(id).await?))
}

async fn list(
    State(service): State<NasService>,
    Query(filter): Query<NasFilter>,
) -> Result<Json<Paginated<NasResponse>>, AppError> {
    Ok(Json(service.list(filter).await?))
}

async fn update(
    State(service): State<NasService>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNasRequest>,
) -> Result<Json<NasResponse>, AppError> {
    Ok(Json(service.update(id, req).await?))
}

async fn remove(
    State(service): State<NasService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
