//! State Management
//!
//! Session and page-title state provided via context to the component tree.

pub mod page_title;
pub mod session;

pub use page_title::{provide_page_title, use_page_title, PageTitle};
pub use session::{provide_session, use_session, Session};
