//! DTO HTTP API бэкенда (общие для клиента и сервера)

pub mod chat;
pub mod health;
pub mod upload;
