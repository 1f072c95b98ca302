//! Рекурсивная нарезка текста на фрагменты фиксированного размера с перекрытием.
//!
//! Сначала текст делится по самому "крупному" разделителю, который в нём
//! встречается (`"\n\n"`, `"\n"`, `" "`, затем посимвольно). Слишком длинные
//! куски рекурсивно делятся следующими разделителями, короткие склеиваются
//! обратно до `chunk_size`. Длина считается в символах.

use std::collections::VecDeque;
use thiserror::Error;

const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitterError {
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,
    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },
}

#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, SplitterError> {
        if chunk_size == 0 {
            return Err(SplitterError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(SplitterError::OverlapTooLarge {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, DEFAULT_SEPARATORS)
    }

    fn split_recursive(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let mut chunks = Vec::new();

        let mut separator = separators.last().copied().unwrap_or("");
        let mut rest: &[&str] = &[];
        for (i, sep) in separators.iter().enumerate() {
            if sep.is_empty() {
                separator = sep;
                rest = &[];
                break;
            }
            if text.contains(sep) {
                separator = sep;
                rest = &separators[i + 1..];
                break;
            }
        }

        let mut good: Vec<&str> = Vec::new();
        for piece in split_on(text, separator) {
            if char_len(piece) < self.chunk_size {
                good.push(piece);
                continue;
            }
            if !good.is_empty() {
                chunks.extend(self.merge_splits(&good, separator));
                good.clear();
            }
            if rest.is_empty() {
                chunks.push(piece.to_string());
            } else {
                chunks.extend(self.split_recursive(piece, rest));
            }
        }
        if !good.is_empty() {
            chunks.extend(self.merge_splits(&good, separator));
        }
        chunks
    }

    /// Склеить короткие куски в фрагменты не длиннее `chunk_size`,
    /// оставляя в начале следующего фрагмента хвост не длиннее `chunk_overlap`
    fn merge_splits(&self, splits: &[&str], separator: &str) -> Vec<String> {
        let sep_len = char_len(separator);
        let mut docs = Vec::new();
        let mut current: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for piece in splits {
            let len = char_len(piece);
            let joiner = |current: &VecDeque<&str>| if current.is_empty() { 0 } else { sep_len };

            if total + len + joiner(&current) > self.chunk_size && !current.is_empty() {
                if let Some(doc) = join_doc(&current, separator) {
                    docs.push(doc);
                }
                while total > self.chunk_overlap
                    || (total > 0 && total + len + joiner(&current) > self.chunk_size)
                {
                    let Some(first) = current.pop_front() else {
                        break;
                    };
                    total -= char_len(first) + joiner(&current);
                }
            }

            total += len + joiner(&current);
            current.push_back(piece);
        }

        if let Some(doc) = join_doc(&current, separator) {
            docs.push(doc);
        }
        docs
    }
}

fn split_on<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    } else {
        text.split(separator).filter(|s| !s.is_empty()).collect()
    }
}

fn join_doc(parts: &VecDeque<&str>, separator: &str) -> Option<String> {
    let joined = parts.iter().copied().collect::<Vec<_>>().join(separator);
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
