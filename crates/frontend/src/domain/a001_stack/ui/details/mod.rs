pub mod file_tile;
pub mod view;
pub mod view_model;

pub use view::StackDetailPage;
