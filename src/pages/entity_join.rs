//! Entity Join Page
//!
//! Adds the session user to the entity's membership relation with a single
//! mutation; success returns to the dashboard. The entity name arrives as a
//! `?name=` hint so the title reads naturally without an extra fetch.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::{FormError, Spinner};
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

#[component]
pub fn EntityJoin() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let entity_id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
    let hinted_name = query.with_untracked(|q| q.get("name").cloned());

    let title = match &hinted_name {
        Some(name) => format!("Join {}", name),
        None => "Join".to_string(),
    };
    use_page_title(title);

    let session = use_session();
    let navigate = use_navigate();

    let (fetching, set_fetching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let join = move |_| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };

        set_error.set(None);
        set_fetching.set(true);

        let navigate = navigate.clone();
        let entity_id = entity_id.clone();
        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::join_entity(&client, &entity_id, &user.id).await {
                Ok(()) => {
                    navigate("/app", Default::default());
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

            let join = join.clone();
            view! {
                <div class="bottom-padded-page">
                    <ul>
                        <li class="stacked-section">
                            <FormError message=Signal::derive(move || error.get()) />
                        </li>
                        <li class="stacked-section">
                            <button class="stacked-button" type="button" on:click=join>
                                "Sign up"
                            </button>
                        </li>
                    </ul>
                </div>
            }
            .into_view()
        }}
    }
}
