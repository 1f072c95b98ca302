//! Хранилище стеков - единственный источник истины для списка стеков.
//!
//! Порядок элементов - порядок вставки. Пустые имена отклоняются здесь,
//! а не в каждом вызывающем коде.

use super::aggregate::{normalize_name, Stack, StackError, StackId};

#[derive(Debug, Clone, Default)]
pub struct StackStore {
    stacks: Vec<Stack>,
}

impl StackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать стек и добавить его в конец списка
    pub fn create(&mut self, name: &str) -> Result<Stack, StackError> {
        let name = normalize_name(name)?;
        let stack = Stack::new_for_insert(name);
        self.stacks.push(stack.clone());
        Ok(stack)
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn get(&self, id: StackId) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
