//! Локальное хранилище фрагментов и конвейер ответа на вопросы по ним.
//!
//! Поиск - по пересечению терминов запроса и фрагмента, без эмбеддингов.

pub mod reasoning;
pub mod vault;

pub use reasoning::{answer_question, ChatError};
pub use vault::{Vault, VaultChunk, VAULT};
