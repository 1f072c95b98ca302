/// Состояние редактирования имени одного файла.
///
/// `Idle → Editing` по двойному клику; фиксация (blur / Enter) всегда
/// возвращает в `Idle`. Пустой черновик ничего не переименовывает.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileEditor {
    #[default]
    Idle,
    Editing {
        draft: String,
    },
}

impl FileEditor {
    pub fn begin(&mut self, current_name: &str) {
        *self = FileEditor::Editing {
            draft: current_name.to_string(),
        };
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let FileEditor::Editing { draft } = self {
            *draft = text.into();
        }
    }

    /// Зафиксировать ввод. Возвращает новое имя, если его нужно применить.
    pub fn commit(&mut self) -> Option<String> {
        let state = std::mem::take(self);
        match state {
            FileEditor::Editing { draft } => {
                let trimmed = draft.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            FileEditor::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = FileEditor::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FileEditor::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            FileEditor::Editing { draft } => Some(draft),
            FileEditor::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_stack_file::{RenameOutcome, UploadedFiles};

    #[test]
    fn test_begin_starts_with_current_name() {
        let mut editor = FileEditor::default();
        assert!(!editor.is_editing());
        editor.begin("cat.png");
        assert_eq!(editor.draft(), Some("cat.png"));
    }

    #[test]
    fn test_commit_non_empty_returns_trimmed_name() {
        let mut editor = FileEditor::default();
        editor.begin("cat.png");
        editor.set_draft("  kitten.png ");
        assert_eq!(editor.commit(), Some("kitten.png".to_string()));
        assert_eq!(editor, FileEditor::Idle);
    }

    #[test]
    fn test_commit_empty_leaves_edit_mode_without_rename() {
        let mut files = UploadedFiles::new();
        files.add_many(vec![((), "cat.png")]);

        let mut editor = FileEditor::default();
        editor.begin("cat.png");
        editor.set_draft("   ");
        let committed = editor.commit();

        assert_eq!(committed, None);
        assert!(!editor.is_editing());
        assert_eq!(files.get(0).unwrap().display_name, "cat.png");
    }

    #[test]
    fn test_commit_then_apply_renames() {
        let mut files = UploadedFiles::new();
        files.add_many(vec![((), "a.txt"), ((), "b.txt")]);

        let mut editor = FileEditor::default();
        editor.begin("b.txt");
        editor.set_draft("summary.txt");
        let name = editor.commit().unwrap();

        assert_eq!(files.rename(1, &name), RenameOutcome::Renamed);
        assert_eq!(files.get(0).unwrap().display_name, "a.txt");
        assert_eq!(files.get(1).unwrap().display_name, "summary.txt");
    }

    #[test]
    fn test_set_draft_ignored_when_idle() {
        let mut editor = FileEditor::default();
        editor.set_draft("x");
        assert_eq!(editor, FileEditor::Idle);
        assert_eq!(editor.commit(), None);
    }

    #[test]
    fn test_cancel() {
        let mut editor = FileEditor::default();
        editor.begin("a");
        editor.cancel();
        assert!(!editor.is_editing());
    }
}
