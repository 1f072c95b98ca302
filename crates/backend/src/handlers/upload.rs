use axum::{extract::Multipart, http::StatusCode, Json};
use serde_json::json;

use crate::domain::a002_stack_file::service::{self, UploadError};
use crate::shared::{config, rag::VAULT};
use contracts::shared::upload::UploadResponse;

/// POST /upload
pub async fn upload_file(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = read_file_field(&mut multipart).await.and_then(|(filename, bytes)| {
        service::ingest(&filename, &bytes, &config::current().upload, &VAULT)
    });

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("File upload failed: {}", e);
            let status = match e {
                UploadError::MissingFile => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(json!({"detail": format!("File upload failed: {}", e)})),
            ))
        }
    }
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?;
        return Ok((filename, bytes.to_vec()));
    }
    Err(UploadError::MissingFile)
}
