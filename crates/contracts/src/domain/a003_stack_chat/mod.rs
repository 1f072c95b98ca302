pub mod transcript;

pub use transcript::{ChatMessage, ChatRole, ChatTranscript, PendingReply, ECHO_DELAY_MS};
