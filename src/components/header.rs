//! Debug Header
//!
//! Navigation strip shown on every view except the index: back button,
//! current page title (or path), and log-out.

use leptos::*;
use leptos_router::*;

use crate::routing;
use crate::state::session::use_session;
use crate::state::page_title::PageTitle;

#[component]
pub fn DebugHeader() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let title = use_context::<PageTitle>().expect("PageTitle not provided");

    let pathname = location.pathname;

    let go_back = {
        let navigate = navigate.clone();
        move |_| {
            let path = pathname.get_untracked();
            if path.starts_with(routing::AUTHED_PREFIX) {
                if let Some(window) = web_sys::window() {
                    let _ = window.history().and_then(|h| h.back());
                }
            } else {
                navigate("/", Default::default());
            }
        }
    };

    let log_out = move |_| {
        session.log_out();
        navigate("/", Default::default());
    };

    view! {
        {move || {
            let path = pathname.get();
            if !routing::show_header(&path) {
                return None;
            }

            let back_visible = if routing::show_back_button(&path) { "visible" } else { "hidden" };
            let log_out_visible = if routing::show_log_out_button(&path) { "visible" } else { "hidden" };
            let heading = title.0.get().unwrap_or(path);

            Some(view! {
                <div class="debug-header">
                    <div class="debug-first-button" style:visibility=back_visible>
                        <button class="back-button" on:click=go_back.clone()>
                            <BackArrow />
                        </button>
                    </div>
                    <div class="debug-title">{heading}</div>
                    <div class="debug-last-button" style:visibility=log_out_visible>
                        <button class="log-out-button" on:click=log_out.clone()>
                            "Log out"
                        </button>
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn BackArrow() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="22"
            height="22"
            viewBox="0 0 24 24"
            fill="none"
            stroke="#d1d1d1"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M15 18l-6-6 6-6" />
        </svg>
    }
}
