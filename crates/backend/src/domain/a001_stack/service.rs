use super::repository::{self, RepositoryError};
use contracts::domain::a001_stack::{Stack, StackDto, StackId};

/// Создание нового стека
pub fn create(dto: StackDto) -> Result<Stack, RepositoryError> {
    let stack = repository::insert(&dto.name)?;
    tracing::info!("Stack created: {} ({})", stack.name, stack.to_string_id());
    Ok(stack)
}

/// Получение списка стеков в порядке создания
pub fn list_all() -> Result<Vec<Stack>, RepositoryError> {
    repository::list_all()
}

/// Получение стека по ID
pub fn get_by_id(id: StackId) -> Result<Option<Stack>, RepositoryError> {
    repository::get_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stack::StackError;

    #[test]
    fn test_create_then_find() {
        let created = create(StackDto {
            name: "  Service test  ".into(),
        })
        .unwrap();
        assert_eq!(created.name, "Service test");

        let found = get_by_id(created.id).unwrap();
        assert_eq!(found.map(|s| s.id), Some(created.id));
        assert!(list_all().unwrap().iter().any(|s| s.id == created.id));
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let before = list_all().unwrap().len();
        let err = create(StackDto { name: "   ".into() }).unwrap_err();
        assert!(matches!(err, RepositoryError::Domain(StackError::EmptyName)));
        // Параллельные тесты могут только добавлять
        assert!(list_all().unwrap().len() >= before);
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(get_by_id(StackId::new_v4()).unwrap().is_none());
    }
}
