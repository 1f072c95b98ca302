use crate::domain::a002_stack_file::FileKind;
use serde::{Deserialize, Serialize};

/// Ответ POST /upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub kind: FileKind,
    pub message: String,
    /// Количество фрагментов, сохранённых в хранилище
    pub chunks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}
