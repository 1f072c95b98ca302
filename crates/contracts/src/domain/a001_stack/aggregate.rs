use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор стека (в пределах сессии не переиспользуется)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackId(pub Uuid);

impl StackId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for StackId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StackId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Стек - именованная группа, созданная пользователем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub id: StackId,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Stack {
    /// Создать новый стек. Имя должно быть уже нормализовано.
    pub(crate) fn new_for_insert(name: String) -> Self {
        Self {
            id: StackId::new_v4(),
            name,
            created_at: Utc::now(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// Ошибки операций над стеками
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("Stack name must not be empty")]
    EmptyName,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания стека
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StackDto {
    pub name: String,
}

/// Нормализовать имя стека: обрезать пробелы и отклонить пустое значение
pub fn normalize_name(name: &str) -> Result<String, StackError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StackError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_id_string_round_trip() {
        let id = StackId::new_v4();
        let parsed = StackId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(StackId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Work  ").unwrap(), "Work");
        assert_eq!(normalize_name("   "), Err(StackError::EmptyName));
        assert_eq!(normalize_name(""), Err(StackError::EmptyName));
    }

    #[test]
    fn test_stack_serializes_created_at_in_camel_case() {
        let stack = Stack::new_for_insert("Work".into());
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(json["name"], "Work");
        assert!(json.get("createdAt").is_some());
    }
}
