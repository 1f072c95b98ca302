pub mod a001_stack;
pub mod a002_stack_file;
pub mod a003_stack_chat;
pub mod common;
