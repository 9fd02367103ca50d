//! Create-Organization Page
//!
//! Issues the `createGlobalEntity` mutation with the session user as creator
//! and first administrator. Success moves on to the new entity's join screen
//! unless auto-join was unchecked.

use leptos::*;

use crate::api::operations;
use crate::components::{FormError, Spinner};
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

/// An empty or whitespace-only name never reaches the network.
pub fn validate_entity_name(name: &str) -> Result<&str, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter an organization name.");
    }
    Ok(name)
}

#[component]
pub fn Create() -> impl IntoView {
    use_page_title("Create");

    let session = use_session();
    let navigate = leptos_router::use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (auto_join, set_auto_join) = create_signal(true);
    let (fetching, set_fetching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let submit = move |_| {
        let raw = name.get_untracked();
        let entity_name = match validate_entity_name(&raw) {
            Ok(entity_name) => entity_name.to_string(),
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };

        let Some(user) = session.user.get_untracked() else {
            return;
        };

        set_error.set(None);
        set_fetching.set(true);

        let navigate = navigate.clone();
        let join_after = auto_join.get_untracked();
        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::create_global_entity(&client, &entity_name, &user.id).await {
                Ok(entity) => {
                    if join_after {
                        let target = format!(
                            "/app/entity/{}/join?name={}",
                            entity.id,
                            String::from(js_sys::encode_uri_component(&entity.name))
                        );
                        navigate(&target, Default::default());
                    } else {
                        navigate("/app", Default::default());
                    }
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
                    <ul>
                        <li class="stacked-section">
                            <p class="body-text">
                                "This organization will be created in two environments: sandbox and \
                                 production. The sandbox environment is for entering dummy, training, \
                                 or test data only. The production environment is for entering actual \
                                 production-ready data only."
                                <strong>
                                    " DO NOT enter dummy data in the production environment or it may \
                                     be used in auditing, analytics, alerting or reporting."
                                </strong>
                                <br /> <br />
                                "This is an important distinction to ensure that you have an \
                                 environment to learn how to use the software."
                            </p>
                        </li>
                        <li class="stacked-section">
                            <FormError message=Signal::derive(move || error.get()) />
                        </li>
                        <li class="stacked-section">
                            <label class="stacked-label">"Organization Name"</label>
                            <input
                                class="stacked-input block-input"
                                type="text"
                                placeholder="organization name (public)"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <div class="stacked-separator" />
                        </li>
                        <li class="stacked-section">
                            <div class="stacked-label">"Membership"</div>
                            <label class="stacked-input block-input checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || auto_join.get()
                                    on:change=move |_| set_auto_join.update(|v| *v = !*v)
                                />
                                <span>"Join this organization immediately after it is created"</span>
                            </label>
                            <div class="stacked-separator" />
                        </li>
                        <li class="stacked-section">
                            <button class="stacked-button" type="button" on:click=submit.clone()>
                                "Create organization"
                            </button>
                        </li>
                        <li class="stacked-section">
                            <p class="body-text center-text">
                                "Note that your organization name is made public solely so that new \
                                 members may apply to join your organization during sign up. You have \
                                 the ability to approve or deny membership to your organization."
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
    fn test_whitespace_only_name_rejected() {
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("   \t").is_err());
    }

    #[test]
    fn test_name_is_trimmed_before_submission() {
        assert_eq!(validate_entity_name("  Acme Kilns  "), Ok("Acme Kilns"));
    }
}
