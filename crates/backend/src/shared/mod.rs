pub mod config;
pub mod file_processor;
pub mod rag;
