//! Файлы на странице стека: классификация по расширению, список загрузок
//! и переименование по месту.

pub mod editor;
pub mod file_kind;
pub mod uploaded;

pub use editor::FileEditor;
pub use file_kind::FileKind;
pub use uploaded::{RenameOutcome, UploadedFile, UploadedFiles};
