//! Log-In Page
//!
//! Runs the `signinUser` mutation and, on success, drives the session's
//! credential swap before navigating into the authenticated section.
//!
//! Context arrives as query parameters: `signed_up`/`email` from the sign-up
//! hand-off, `from` when the routing guard forwarded an originally requested
//! path.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::{FormError, Spinner};
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;
use crate::storage;

/// Prefilled address for the demo's returning-log-in flow.
const DEMO_EMAIL: &str = "jimthedev@gmail.com";

#[component]
pub fn LogIn() -> impl IntoView {
    use_page_title("Log in");

    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let signed_up = query.with_untracked(|q| q.get("signed_up").is_some());
    let preferred_email = query.with_untracked(|q| q.get("email").cloned());
    let forwarded_from = query.with_untracked(|q| q.get("from").cloned());

    let initial_email = preferred_email
        .or_else(|| storage::get_item(storage::LAST_EMAIL_KEY))
        .unwrap_or_else(|| DEMO_EMAIL.to_string());

    let (email, set_email) = create_signal(initial_email);
    let (fetching, set_fetching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let greeting = {
        let forwarded = forwarded_from.clone();
        move || {
            if signed_up {
                "Thanks for joining us. Please log in to continue.".to_string()
            } else if let Some(from) = &forwarded {
                format!("Please log in to access {}", from)
            } else {
                "Thanks for choosing Pyrometry Pro. Please log in to get started.".to_string()
            }
        }
    };

    let submit = move |_| {
        let address = email.get_untracked();
        storage::set_item(storage::LAST_EMAIL_KEY, &address);

        set_error.set(None);
        set_fetching.set(true);

        let navigate = navigate.clone();
        let destination = forwarded_from.clone().unwrap_or_else(|| "/app".to_string());
        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::log_in(&client, &address, crate::pages::sign_up::DEMO_PASSWORD).await
            {
                Ok(payload) => {
                    session.log_in(payload.token, payload.user);
                    navigate(&destination, Default::default());
                }
                Err(e) => {
                    // Failed attempts leave the session Anonymous.
                    set_error.set(Some(e.first_message()));
                    set_fetching.set(false);
                }
            }
        });
    };

    view! {
        {move || {
            if fetching.get() {
                return view! { <Spinner /> }.into_view();
            }

            let greeting = greeting.clone();
            view! {
                <div>
                    <ul>
                        <li class="stacked-section">
                            <p class="body-text">{greeting()}</p>
                            <FormError message=Signal::derive(move || error.get()) />
                        </li>
                        <li class="stacked-section">
                            <label class="stacked-label">"Email"</label>
                            <input
                                class="stacked-input block-input"
                                type="text"
                                placeholder="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <div class="stacked-separator" />
                        </li>
                        <li class="stacked-section">
                            <label class="stacked-label">
                                "Password (disabled for demo purposes)"
                            </label>
                            <input
                                class="stacked-input block-input"
                                type="text"
                                disabled
                                placeholder="password"
                                prop:value=crate::pages::sign_up::DEMO_PASSWORD
                            />
                            <div class="stacked-separator" />
                        </li>
                        <li class="stacked-section">
                            <button class="stacked-button" type="button" on:click=submit.clone()>
                                "Log in"
                            </button>
                        </li>
                        <li class="stacked-section">
                            <p class="body-text center-text">
                                "New to Pyrometry Pro?"
                                <br />
                                <A href="/sign-up">"Sign up"</A>
                            </p>
                        </li>
                    </ul>
                </div>
            }
            .into_view()
        }}
    }
}
