pub mod aggregate;
pub mod store;

pub use aggregate::{Stack, StackDto, StackError, StackId};
pub use store::StackStore;
