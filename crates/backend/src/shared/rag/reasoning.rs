//! Конвейер ответа: retrieve → compose.
//!
//! Модель не вызывается: ответ собирается из найденных фрагментов и
//! контекста, переданного клиентом.

use super::vault::Vault;
use contracts::shared::chat::{ChatRequest, ChatResponse};
use thiserror::Error;

pub const NOTHING_FOUND_ANSWER: &str =
    "I couldn't find anything related in your uploaded files yet. Try uploading some notes first.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("retrieval failed: {0}")]
    Retrieval(String),
}

/// Состояние, которое проходит через шаги конвейера
#[derive(Debug, Default)]
struct GraphState {
    question: String,
    context: Vec<String>,
    answer: String,
}

pub fn answer_question(
    vault: &Vault,
    request: &ChatRequest,
    top_k: usize,
) -> Result<ChatResponse, ChatError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(ChatError::EmptyQuestion);
    }

    let mut state = GraphState {
        question: question.to_string(),
        context: request
            .context
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        answer: String::new(),
    };

    retrieve(&mut state, vault, top_k).map_err(|e| ChatError::Retrieval(e.to_string()))?;
    compose(&mut state);

    Ok(ChatResponse {
        answer: state.answer,
    })
}

fn retrieve(state: &mut GraphState, vault: &Vault, top_k: usize) -> anyhow::Result<()> {
    tracing::info!("Searching vault for: {}", state.question);
    let hits = vault.search(&state.question, top_k)?;
    tracing::debug!("Vault returned {} fragments", hits.len());
    state.context.extend(hits.into_iter().map(|chunk| chunk.text));
    Ok(())
}

fn compose(state: &mut GraphState) {
    if state.context.is_empty() {
        state.answer = NOTHING_FOUND_ANSWER.to_string();
        return;
    }
    let mut answer = String::from("Here is what I found in your stacks:");
    for fragment in &state.context {
        answer.push_str("\n- ");
        answer.push_str(fragment);
    }
    state.answer = answer;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: &str, context: &[&str]) -> ChatRequest {
        ChatRequest {
            question: question.into(),
            context: context.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_question_is_rejected() {
        let vault = Vault::new();
        let err = answer_question(&vault, &request("  ", &[]), 3).unwrap_err();
        assert!(matches!(err, ChatError::EmptyQuestion));
    }

    #[test]
    fn test_nothing_found() {
        let vault = Vault::new();
        let response = answer_question(&vault, &request("anything?", &[]), 3).unwrap();
        assert_eq!(response.answer, NOTHING_FOUND_ANSWER);
    }

    #[test]
    fn test_answer_lists_client_context_then_retrieved_fragments() {
        let vault = Vault::new();
        vault
            .store(&["Clarity comes after scattering ideas".into()], "notes.txt")
            .unwrap();

        let response =
            answer_question(&vault, &request("when does clarity come?", &["pinned note"]), 3)
                .unwrap();

        let lines: Vec<&str> = response.answer.lines().collect();
        assert_eq!(lines[0], "Here is what I found in your stacks:");
        assert_eq!(lines[1], "- pinned note");
        assert_eq!(lines[2], "- Clarity comes after scattering ideas");
    }

    #[test]
    fn test_blank_context_entries_are_dropped() {
        let vault = Vault::new();
        let response = answer_question(&vault, &request("hello", &["", "  "]), 3).unwrap();
        assert_eq!(response.answer, NOTHING_FOUND_ANSWER);
    }
}
