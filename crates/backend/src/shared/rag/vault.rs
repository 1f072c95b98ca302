use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;
use uuid::Uuid;

/// Слова, которые не участвуют в поиске
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "of", "on",
    "or", "that", "the", "this", "to", "was", "what", "with",
];

/// Хранилище процесса
pub static VAULT: Lazy<Vault> = Lazy::new(Vault::new);

/// Сохранённый фрагмент текста
#[derive(Debug, Clone)]
pub struct VaultChunk {
    pub id: Uuid,
    pub source: String,
    pub text: String,
    terms: HashSet<String>,
}

#[derive(Debug, Default)]
pub struct Vault {
    chunks: RwLock<Vec<VaultChunk>>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сохранить фрагменты, полученные из одного источника
    pub fn store(&self, chunks: &[String], source: &str) -> anyhow::Result<Vec<Uuid>> {
        let mut guard = self
            .chunks
            .write()
            .map_err(|_| anyhow::anyhow!("vault lock poisoned"))?;

        let mut ids = Vec::with_capacity(chunks.len());
        for text in chunks {
            let id = Uuid::new_v4();
            guard.push(VaultChunk {
                id,
                source: source.to_string(),
                text: text.clone(),
                terms: tokenize(text).collect(),
            });
            ids.push(id);
        }

        tracing::info!(
            "Vault: stored {} fragments from '{}' (total {})",
            chunks.len(),
            source,
            guard.len()
        );
        Ok(ids)
    }

    /// Найти до `k` фрагментов с наибольшим числом общих терминов.
    /// При равенстве выше тот, что сохранён раньше.
    pub fn search(&self, query: &str, k: usize) -> anyhow::Result<Vec<VaultChunk>> {
        let guard = self
            .chunks
            .read()
            .map_err(|_| anyhow::anyhow!("vault lock poisoned"))?;

        let query_terms: HashSet<String> = tokenize(query).collect();
        if query_terms.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, usize)> = guard
            .iter()
            .enumerate()
            .map(|(i, chunk)| (i, chunk.terms.intersection(&query_terms).count()))
            .filter(|(_, score)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(i, _)| guard[i].clone())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.chunks.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 1)
        .map(|t| t.to_lowercase())
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
}
