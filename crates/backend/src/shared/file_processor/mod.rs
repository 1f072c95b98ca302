//! Обработка загруженных файлов: извлечение текста и нарезка на фрагменты

pub mod extract;
pub mod text_splitter;

pub use extract::{extract_text, normalize_whitespace};
pub use text_splitter::{SplitterError, TextSplitter};
