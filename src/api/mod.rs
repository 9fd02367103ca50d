//! GraphQL API
//!
//! Transport client and the individual operations each page issues.

pub mod client;
pub mod operations;

pub use client::{ApiError, GraphQlClient};
