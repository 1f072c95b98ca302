pub mod create_modal;
pub mod dashboard;
pub mod details;
pub mod main_view;

pub use create_modal::CreateStackModal;
pub use dashboard::StackDashboard;
pub use details::StackDetailPage;
pub use main_view::MainView;
