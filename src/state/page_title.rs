//! Page-Title Registry
//!
//! A single shared slot the current view registers into on mount and clears
//! on cleanup. The debug header reads it, falling back to the path.

use leptos::*;

#[derive(Clone, Copy)]
pub struct PageTitle(pub RwSignal<Option<String>>);

pub fn provide_page_title() {
    provide_context(PageTitle(create_rw_signal(None)));
}

/// Register `title` for the lifetime of the calling view.
pub fn use_page_title(title: impl Into<String>) {
    let slot = use_context::<PageTitle>().expect("PageTitle not provided");
    slot.0.set(Some(title.into()));

    on_cleanup(move || {
        slot.0.set(None);
    });
}
