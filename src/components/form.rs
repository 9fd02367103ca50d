//! Form Components
//!
//! Inline error display shared by the form views. Transport, GraphQL, and
//! validation failures all render the same way: the first available message,
//! next to the responsible form.

use leptos::*;

/// Inline error block. Renders nothing while the message signal is `None`.
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|msg| view! {
                <div class="body-text stacked-error">{msg}</div>
            })
        }}
    }
}
