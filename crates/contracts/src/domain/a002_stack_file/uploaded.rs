/// Загруженный файл: исходный дескриптор и отображаемое имя.
///
/// `F` - сырой дескриптор файла (`web_sys::File` в браузере).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<F> {
    pub file: F,
    pub display_name: String,
}

impl<F> UploadedFile<F> {
    pub fn new(file: F, original_name: impl Into<String>) -> Self {
        Self {
            file,
            display_name: original_name.into(),
        }
    }
}

/// Результат переименования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Пустое имя после trim - ничего не меняем
    Ignored,
    NotFound,
}

/// Список загруженных файлов. Идентификатор элемента - его позиция.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFiles<F> {
    items: Vec<UploadedFile<F>>,
}

impl<F> Default for UploadedFiles<F> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<F> UploadedFiles<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить файлы в конец списка, сохраняя порядок
    pub fn add_many<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = (F, S)>,
        S: Into<String>,
    {
        self.items
            .extend(files.into_iter().map(|(file, name)| UploadedFile::new(file, name)));
    }

    pub fn rename(&mut self, index: usize, new_name: &str) -> RenameOutcome {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return RenameOutcome::Ignored;
        }
        match self.items.get_mut(index) {
            Some(item) => {
                item.display_name = trimmed.to_string();
                RenameOutcome::Renamed
            }
            None => RenameOutcome::NotFound,
        }
    }

    pub fn items(&self) -> &[UploadedFile<F>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&UploadedFile<F>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
