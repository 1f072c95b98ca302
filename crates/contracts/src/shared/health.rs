use serde::{Deserialize, Serialize};

/// Ответ GET /health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            message: "Inspira backend is running".into(),
        }
    }
}
