use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use crate::domain::a001_stack::{self, repository::RepositoryError};
use contracts::domain::a001_stack::{Stack, StackDto, StackId};
use contracts::domain::common::AggregateId;

/// GET /api/stacks
pub async fn list_all() -> Result<Json<Vec<Stack>>, StatusCode> {
    match a001_stack::service::list_all() {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list stacks: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/stacks/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Stack>, StatusCode> {
    let id = match StackId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_stack::service::get_by_id(id) {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load stack: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/stacks
pub async fn create(
    Json(dto): Json<StackDto>,
) -> Result<(StatusCode, Json<Stack>), (StatusCode, Json<serde_json::Value>)> {
    match a001_stack::service::create(dto) {
        Ok(stack) => Ok((StatusCode::CREATED, Json(stack))),
        Err(RepositoryError::Domain(e)) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))))
        }
        Err(e) => {
            tracing::error!("Failed to create stack: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}
