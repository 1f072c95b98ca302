pub mod a001_stack;
pub mod chat;
pub mod health;
pub mod upload;
