//! Loading Component
//!
//! Three-dot bounce spinner shown while a request is in flight.

use leptos::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="bounce1" />
            <div class="bounce2" />
            <div class="bounce3" />
        </div>
    }
}
