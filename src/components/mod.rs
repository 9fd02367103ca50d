//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod form;
pub mod header;
pub mod loading;

pub use form::FormError;
pub use header::DebugHeader;
pub use loading::Spinner;
