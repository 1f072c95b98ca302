//! Макет чата на странице стека.
//!
//! Ответ "AI" - эхо с фиксированной задержкой, реального вызова модели нет.
//! Таймер доставки ответа принадлежит представлению; здесь только данные.

use serde::{Deserialize, Serialize};

/// Задержка перед доставкой ответа-заглушки, мс
pub const ECHO_DELAY_MS: u32 = 500;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

/// Сообщение чата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
        }
    }
}

/// Ответ, ожидающий доставки после `delay_ms`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub delay_ms: u32,
    pub content: String,
}

impl PendingReply {
    fn acknowledge(message: &str) -> Self {
        Self {
            delay_ms: ECHO_DELAY_MS,
            content: format!(
                "I received your message: \"{}\". This is a placeholder response.",
                message
            ),
        }
    }
}

/// Лента сообщений (только добавление)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Отправить сообщение пользователя.
    ///
    /// Пустой ввод игнорируется. Иначе сообщение добавляется сразу,
    /// а ответ возвращается для отложенной доставки через [`Self::deliver`].
    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        Some(PendingReply::acknowledge(text))
    }

    pub fn deliver(&mut self, reply: PendingReply) {
        self.messages.push(ChatMessage::ai(reply.content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_user_message_synchronously() {
        let mut chat = ChatTranscript::new();
        let reply = chat.send("hello there");

        assert!(reply.is_some());
        assert_eq!(chat.messages(), &[ChatMessage::user("hello there")]);
    }

    #[test]
    fn test_deliver_appends_exactly_one_echo() {
        let mut chat = ChatTranscript::new();
        let reply = chat.send("What is in this stack?").unwrap();
        assert_eq!(reply.delay_ms, ECHO_DELAY_MS);

        chat.deliver(reply);

        assert_eq!(chat.len(), 2);
        let ai = &chat.messages()[1];
        assert_eq!(ai.role, ChatRole::Ai);
        assert!(ai.content.contains("What is in this stack?"));
        assert_eq!(
            ai.content,
            "I received your message: \"What is in this stack?\". This is a placeholder response."
        );
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut chat = ChatTranscript::new();
        assert!(chat.send("   ").is_none());
        assert!(chat.send("").is_none());
        assert!(chat.is_empty());
    }

    #[test]
    fn test_message_text_kept_verbatim() {
        let mut chat = ChatTranscript::new();
        let reply = chat.send("  spaced  ").unwrap();
        assert_eq!(chat.messages()[0].content, "  spaced  ");
        assert!(reply.content.contains("\"  spaced  \""));
    }

    #[test]
    fn test_interleaved_replies_keep_order() {
        let mut chat = ChatTranscript::new();
        let first = chat.send("one").unwrap();
        let second = chat.send("two").unwrap();
        chat.deliver(first);
        chat.deliver(second);

        let roles: Vec<ChatRole> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::User, ChatRole::Ai, ChatRole::Ai]
        );
        assert!(chat.messages()[2].content.contains("\"one\""));
        assert!(chat.messages()[3].content.contains("\"two\""));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::ai("x")).unwrap();
        assert_eq!(json, r#"{"role":"ai","content":"x"}"#);
    }
}
