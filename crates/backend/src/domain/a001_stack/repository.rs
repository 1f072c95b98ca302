//! In-memory репозиторий стеков: один `StackStore` на процесс.
//! Данные живут до завершения процесса.

use contracts::domain::a001_stack::{Stack, StackError, StackId, StackStore};
use once_cell::sync::Lazy;
use std::sync::RwLock;

static STORE: Lazy<RwLock<StackStore>> = Lazy::new(|| RwLock::new(StackStore::new()));

/// Ошибка репозитория: либо доменная, либо сбой блокировки
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] StackError),
    #[error("stack store lock poisoned")]
    Poisoned,
}

pub fn insert(name: &str) -> Result<Stack, RepositoryError> {
    let mut store = STORE.write().map_err(|_| RepositoryError::Poisoned)?;
    Ok(store.create(name)?)
}

pub fn list_all() -> Result<Vec<Stack>, RepositoryError> {
    let store = STORE.read().map_err(|_| RepositoryError::Poisoned)?;
    Ok(store.stacks().to_vec())
}

pub fn get_by_id(id: StackId) -> Result<Option<Stack>, RepositoryError> {
    let store = STORE.read().map_err(|_| RepositoryError::Poisoned)?;
    Ok(store.get(id).cloned())
}
