//! Приём загруженного файла: классификация, извлечение текста,
//! нарезка и сохранение фрагментов в хранилище.

use crate::shared::config::UploadConfig;
use crate::shared::file_processor::{extract_text, SplitterError, TextSplitter};
use crate::shared::rag::Vault;
use contracts::shared::upload::UploadResponse;
use contracts::domain::a002_stack_file::FileKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("multipart field 'file' is missing")]
    MissingFile,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error(transparent)]
    Splitter(#[from] SplitterError),
    #[error("storage failed: {0}")]
    Storage(String),
}

pub fn ingest(
    filename: &str,
    bytes: &[u8],
    config: &UploadConfig,
    vault: &Vault,
) -> Result<UploadResponse, UploadError> {
    let kind = FileKind::from_file_name(filename);
    tracing::info!(
        "Upload received: {} ({} bytes, {})",
        filename,
        bytes.len(),
        kind.as_str()
    );

    let Some(text) = extract_text(filename, bytes) else {
        return Ok(UploadResponse {
            filename: filename.to_string(),
            kind,
            message: "File uploaded but no text extracted (or empty).".into(),
            chunks: 0,
            preview: None,
        });
    };

    let splitter = TextSplitter::new(config.chunk_size, config.chunk_overlap)?;
    let chunks = splitter.split_text(&text);
    vault
        .store(&chunks, filename)
        .map_err(|e| UploadError::Storage(e.to_string()))?;

    Ok(UploadResponse {
        filename: filename.to_string(),
        kind,
        message: "File processed successfully!".into(),
        chunks: chunks.len(),
        preview: Some(preview(&text, config.preview_chars)),
    })
}

fn preview(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}
