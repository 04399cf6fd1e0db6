//! CRUD handlers shared by every resource route.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use taskboard_core::{Resource, ResourceService};

#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/{resource}
pub async fn create<R: Resource>(
    State(service): State<ResourceService<R>>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<R>>), ApiError> {
    let Json(payload) = payload?;
    let entity = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entity })))
}

/// GET /api/{resource}
pub async fn list<R: Resource>(
    State(service): State<ResourceService<R>>,
) -> Result<Json<DataResponse<Vec<R>>>, ApiError> {
    let items = service.list().await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/{resource}/:id
pub async fn get<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<R>>, ApiError> {
    let entity = service.get_by_id(&id).await?;
    Ok(Json(DataResponse { data: entity }))
}

/// PUT /api/{resource}/:id
pub async fn update<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(id): Path<String>,
    payload: Result<Json<R::Update>, JsonRejection>,
) -> Result<Json<DataResponse<R>>, ApiError> {
    let Json(patch) = payload?;
    let entity = service.update(&id, patch).await?;

    Ok(Json(DataResponse { data: entity }))
}

/// DELETE /api/{resource}/:id
pub async fn delete<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = service.delete(&id).await?;
    Ok(Json(MessageResponse { message }))
}
