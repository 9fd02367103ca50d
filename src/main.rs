//! Pyrometry Pro
//!
//! Multi-tenant SaaS demo front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Sign-up and log-in against a hosted GraphQL API
//! - Organization ("global entity") creation and membership flows
//! - Client-side routing with an authenticated `/app` section
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence is browser local storage; all data access
//! goes through a single hosted GraphQL endpoint.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod routing;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
