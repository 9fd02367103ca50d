//! Sign-Up Page
//!
//! Creates an account via the `createUser` mutation. Sign-up does not log the
//! user in; success hands off to the log-in view with the new email preferred.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::{FormError, Spinner};
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

/// Demo builds fix every test user's password.
pub const DEMO_PASSWORD: &str = "blahblah";

/// Cheap shape check done before any request: trimmed, with a local part
/// ahead of the `@`.
pub fn validate_email(email: &str) -> Result<&str, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.find('@').is_some_and(|at| at > 0) {
        return Err("Please enter an email address.");
    }
    Ok(email)
}

#[component]
pub fn SignUp() -> impl IntoView {
    use_page_title("Sign up");

    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (fetching, set_fetching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let submit = move |_| {
        let raw = email.get_untracked();
        let address = match validate_email(&raw) {
            Ok(address) => address.to_string(),
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_fetching.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::sign_up(&client, &address, DEMO_PASSWORD).await {
                Ok(created) => {
                    let target = format!(
                        "/log-in?signed_up=1&email={}",
                        String::from(js_sys::encode_uri_component(&created.email))
                    );
                    navigate(&target, Default::default());
                }
                Err(e) => {
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

            view! {
                <div>
                    <FormError message=Signal::derive(move || error.get()) />
                    <ul>
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
                                prop:value=DEMO_PASSWORD
                            />
                            <div class="stacked-separator" />
                        </li>
                        <li class="stacked-section">
                            <button class="stacked-button" type="button" on:click=submit.clone()>
                                "Sign up"
                            </button>
                        </li>
                        <li class="stacked-section">
                            <p class="body-text center-text">
                                "Already have a Pyrometry Pro account?"
                                <br />
                                <A href="/log-in">"Log in"</A>
                            </p>
                        </li>
                    </ul>
                </div>
            }
            .into_view()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_addresses_pass() {
        assert_eq!(validate_email("pat@example.com"), Ok("pat@example.com"));
        assert_eq!(validate_email("  pat@example.com  "), Ok("pat@example.com"));
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn test_at_sign_must_follow_a_local_part() {
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}
