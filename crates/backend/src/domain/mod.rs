pub mod a001_stack;
pub mod a002_stack_file;
