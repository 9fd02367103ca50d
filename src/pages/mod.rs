//! Pages
//!
//! Top-level page components for each route.

pub mod administer;
pub mod create;
pub mod dashboard;
pub mod entity_join;
pub mod index;
pub mod join;
pub mod log_in;
pub mod sign_up;

pub use administer::AdministerEntity;
pub use create::Create;
pub use dashboard::PlatformDashboard;
pub use entity_join::EntityJoin;
pub use index::Index;
pub use join::Join;
pub use log_in::LogIn;
pub use sign_up::SignUp;
