use contracts::domain::a002_stack_file::FileKind;

/// Форматы, которые распознаются как текстовые, но требуют отдельного
/// парсера (в этой сборке не поддерживаются)
const UNSUPPORTED_DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx", "rtf"];

/// Извлечь "чистый" текст из содержимого файла.
///
/// PDF разбирается через `pdf-extract`, остальные текстовые файлы должны
/// быть в UTF-8. Возвращает `None`, если файл не текстовый или текст пуст
/// после очистки.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Option<String> {
    let kind = FileKind::from_file_name(filename);
    match kind {
        FileKind::Image | FileKind::Audio | FileKind::Video => return None,
        FileKind::Text | FileKind::Other => {}
    }

    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    let raw = if ext == "pdf" {
        extract_pdf_text(filename, bytes)?
    } else if UNSUPPORTED_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        tracing::warn!("No text extractor for '{}' documents: {}", ext, filename);
        return None;
    } else {
        // NUL-байты - надёжный признак бинарного содержимого
        if bytes.contains(&0) {
            return None;
        }
        std::str::from_utf8(bytes).ok()?.to_string()
    };

    let clean = normalize_whitespace(&raw);
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Текст всех страниц PDF. Повреждённый файл даёт `None`.
fn extract_pdf_text(filename: &str, bytes: &[u8]) -> Option<String> {
    // pdf-extract паникует на части некорректных файлов
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match result {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            tracing::warn!("Failed to extract text from PDF {}: {}", filename, e);
            None
        }
        Err(_) => {
            tracing::warn!("PDF parser panicked on {}", filename);
            None
        }
    }
}

/// Схлопнуть любые последовательности пробельных символов в один пробел
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_plain_text() {
        let text = extract_text("notes.txt", b"  From chaos\n\n to\tclarity.  ");
        assert_eq!(text.as_deref(), Some("From chaos to clarity."));
    }

    #[test]
    fn test_extracts_markdown_and_unknown_utf8() {
        assert_eq!(extract_text("readme.md", b"# Title").as_deref(), Some("# Title"));
        assert_eq!(extract_text("main.rs", b"fn main() {}").as_deref(), Some("fn main() {}"));
    }

    /// Одностраничный PDF с одной строкой текста
    fn sample_pdf(line: &str) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_pdf_text() {
        let pdf = sample_pdf("Zebras graze at dawn");
        let text = extract_text("paper.PDF", &pdf).expect("pdf text");
        assert!(text.contains("Zebras"), "unexpected text: {text:?}");
        assert!(text.contains("dawn"), "unexpected text: {text:?}");
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_broken_pdf_gives_no_text() {
        assert_eq!(extract_text("paper.pdf", b"%PDF-1.7 truncated"), None);
    }

    #[test]
    fn test_skips_media_and_binary_documents() {
        assert_eq!(extract_text("photo.png", b"not really a png"), None);
        assert_eq!(extract_text("letter.docx", b"PK\x03\x04"), None);
        assert_eq!(extract_text("blob.bin", &[0x00, 0x01, 0x02]), None);
        assert_eq!(extract_text("latin1.txt", &[0xff, 0xfe, 0x41]), None);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(extract_text("empty.txt", b" \n\t "), None);
    }
}
