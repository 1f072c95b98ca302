use contracts::domain::a001_stack::{Stack, StackError, StackId, StackStore};
use leptos::prelude::*;

/// Глобальное состояние приложения: список стеков и открытая страница стека.
///
/// Единственный владелец `StackStore`; представления получают его через контекст.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub stacks: RwSignal<StackStore>,
    pub opened: RwSignal<Option<StackId>>,
    pub create_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            stacks: RwSignal::new(StackStore::new()),
            opened: RwSignal::new(None),
            create_open: RwSignal::new(false),
        }
    }

    pub fn create_stack(&self, name: &str) -> Result<Stack, StackError> {
        let result = self.stacks.write().create(name);
        match &result {
            Ok(stack) => log::info!("Stack created: {} ({})", stack.name, stack.to_string_id()),
            Err(e) => log::warn!("Stack rejected: {}", e),
        }
        result
    }

    pub fn open_stack(&self, id: StackId) {
        self.opened.set(Some(id));
    }

    pub fn close_stack(&self) {
        self.opened.set(None);
    }

    pub fn open_create_modal(&self) {
        self.create_open.set(true);
    }

    pub fn close_create_modal(&self) {
        self.create_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::error!("AppGlobalContext context not found, using a detached one");
        AppGlobalContext::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_open_stack() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            let stack = ctx.create_stack("  Research ").unwrap();
            assert_eq!(stack.name, "Research");
            assert_eq!(ctx.stacks.with_untracked(|s| s.len()), 1);

            ctx.open_stack(stack.id);
            assert_eq!(ctx.opened.get_untracked(), Some(stack.id));

            ctx.close_stack();
            assert_eq!(ctx.opened.get_untracked(), None);
        });
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert_eq!(ctx.create_stack("   "), Err(StackError::EmptyName));
            assert!(ctx.stacks.with_untracked(|s| s.is_empty()));
        });
    }
}
