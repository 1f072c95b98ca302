use serde::{Deserialize, Serialize};

/// Запрос POST /chat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    /// Дополнительный контекст от клиента
    #[serde(default)]
    pub context: Vec<String>,
}

/// Ответ POST /chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}
