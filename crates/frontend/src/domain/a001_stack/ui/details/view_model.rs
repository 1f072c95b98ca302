//! Stack Detail - View Model

use contracts::domain::a002_stack_file::{FileKind, RenameOutcome, UploadedFiles};
use contracts::domain::a003_stack_chat::ChatTranscript;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FileReader, ProgressEvent};

type ReaderSlot = (FileReader, Closure<dyn FnMut(ProgressEvent)>);

/// Состояние страницы стека. Живёт, пока страница открыта.
#[derive(Clone, Copy)]
pub struct StackDetailsVm {
    pub files: RwSignal<UploadedFiles<File>, LocalStorage>,
    /// Миниатюры изображений (data URL) по позиции файла
    pub thumbnails: RwSignal<HashMap<usize, String>>,
    pub is_dragging: RwSignal<bool>,
    pub transcript: RwSignal<ChatTranscript>,
    pub chat_input: RwSignal<String>,
    /// Незавершённые чтения миниатюр по позиции файла
    readers: StoredValue<HashMap<usize, ReaderSlot>, LocalStorage>,
}

impl StackDetailsVm {
    pub fn new() -> Self {
        let readers = StoredValue::new_local(HashMap::<usize, ReaderSlot>::new());
        // Незавершённые чтения отменяются вместе со страницей
        on_cleanup(move || {
            readers.try_update_value(|slots| {
                for (_, (reader, _)) in slots.drain() {
                    reader.set_onloadend(None);
                    reader.abort();
                }
            });
        });

        Self {
            files: RwSignal::new_local(UploadedFiles::new()),
            thumbnails: RwSignal::new(HashMap::new()),
            is_dragging: RwSignal::new(false),
            transcript: RwSignal::new(ChatTranscript::new()),
            chat_input: RwSignal::new(String::new()),
            readers,
        }
    }

    /// Добавить файлы из `FileList` (drop или выбор через диалог)
    pub fn add_files(&self, list: &FileList) {
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        if files.is_empty() {
            return;
        }

        let start = self.files.with_untracked(|f| f.len());
        for (offset, file) in files.iter().enumerate() {
            if FileKind::from_file_name(&file.name()) == FileKind::Image {
                self.read_thumbnail(start + offset, file);
            }
        }

        log::debug!("Files added: {}", files.len());
        self.files.update(|list| {
            list.add_many(files.into_iter().map(|file| {
                let name = file.name();
                (file, name)
            }))
        });
    }

    pub fn rename(&self, index: usize, new_name: &str) -> RenameOutcome {
        let outcome = self
            .files
            .try_update(|list| list.rename(index, new_name))
            .unwrap_or(RenameOutcome::NotFound);
        if outcome != RenameOutcome::Renamed {
            log::debug!("Rename of file #{} skipped: {:?}", index, outcome);
        }
        outcome
    }

    /// Прочитать изображение как data URL. Ошибка чтения оставляет
    /// миниатюру пустой.
    fn read_thumbnail(&self, index: usize, file: &File) {
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("FileReader unavailable: {:?}", e);
                return;
            }
        };

        let thumbnails = self.thumbnails;
        let readers = self.readers;
        let source = reader.clone();
        // loadend приходит и после ошибки: слот освобождается в любом случае
        let onloadend = Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            if let Some(url) = source.result().ok().and_then(|value| value.as_string()) {
                thumbnails.try_update(|map| map.insert(index, url));
            }
            readers.try_update_value(|slots| slots.remove(&index));
        });
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

        if let Err(e) = reader.read_as_data_url(file) {
            log::warn!("Failed to read {}: {:?}", file.name(), e);
            reader.set_onloadend(None);
            return;
        }
        self.readers
            .try_update_value(|slots| slots.insert(index, (reader, onloadend)));
    }
}
