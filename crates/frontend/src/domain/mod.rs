pub mod a001_stack;
