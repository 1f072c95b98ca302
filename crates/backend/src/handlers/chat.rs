use axum::Json;

use crate::shared::{config, rag};
use contracts::shared::chat::{ChatRequest, ChatResponse};

/// POST /chat
///
/// Ошибки конвейера не превращаются в HTTP-ошибку: клиент получает
/// текст ошибки в поле `answer`.
pub async fn chat_endpoint(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    match rag::answer_question(&rag::VAULT, &request, config::current().chat.top_k) {
        Ok(response) => Json(response),
        Err(e) => {
            tracing::warn!("Error in chat endpoint: {}", e);
            Json(ChatResponse {
                answer: format!("Backend Error: {}", e),
            })
        }
    }
}
