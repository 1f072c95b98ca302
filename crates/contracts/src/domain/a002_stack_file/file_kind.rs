use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a", "aac"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "doc", "docx", "pdf", "rtf", "md"];

/// Категория файла, определяет иконку или миниатюру
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Audio,
    Video,
    Text,
    Other,
}

impl FileKind {
    /// Классифицировать файл по расширению (часть после последней точки)
    pub fn from_file_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return FileKind::Other,
        };
        Self::from_extension(&ext)
    }

    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            FileKind::Image
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            FileKind::Audio
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            FileKind::Video
        } else if TEXT_EXTENSIONS.contains(&ext) {
            FileKind::Text
        } else {
            FileKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Audio => "audio",
            FileKind::Video => "video",
            FileKind::Text => "text",
            FileKind::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_each_bucket() {
        assert_eq!(FileKind::from_file_name("photo.jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_file_name("song.flac"), FileKind::Audio);
        assert_eq!(FileKind::from_file_name("clip.webm"), FileKind::Video);
        assert_eq!(FileKind::from_file_name("notes.md"), FileKind::Text);
        assert_eq!(FileKind::from_file_name("paper.pdf"), FileKind::Text);
        assert_eq!(FileKind::from_file_name("archive.zip"), FileKind::Other);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileKind::from_file_name("IMG_0001.PNG"), FileKind::Image);
        assert_eq!(FileKind::from_extension("Mp3"), FileKind::Audio);
    }

    #[test]
    fn test_uses_last_extension_only() {
        assert_eq!(FileKind::from_file_name("backup.png.zip"), FileKind::Other);
        assert_eq!(FileKind::from_file_name("report.final.txt"), FileKind::Text);
    }

    #[test]
    fn test_missing_extension_is_other() {
        assert_eq!(FileKind::from_file_name("Makefile"), FileKind::Other);
        assert_eq!(FileKind::from_file_name("trailing."), FileKind::Other);
        assert_eq!(FileKind::from_file_name(""), FileKind::Other);
    }
}
