//! Find-Organization Page
//!
//! Search for an existing organization by name; each result links to that
//! entity's join screen.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::{FormError, Spinner};
use crate::model::EntityRef;
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

#[component]
pub fn Join() -> impl IntoView {
    use_page_title("Join");

    let session = use_session();

    let (query, set_query) = create_signal(String::new());
    let (fetching, set_fetching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (results, set_results) = create_signal(None::<Vec<EntityRef>>);

    let search = move |_| {
        let needle = query.get_untracked().trim().to_string();

        set_error.set(None);
        set_fetching.set(true);

        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::search_entities(&client, &needle).await {
                Ok(entities) => set_results.set(Some(entities)),
                Err(e) => set_error.set(Some(e.first_message())),
            }
            set_fetching.set(false);
        });
    };

    view! {
        <div class="bottom-padded-page">
            <ul>
                <li class="stacked-section">
                    <FormError message=Signal::derive(move || error.get()) />
                    <label class="stacked-label">
                        "Search for an existing organization to join"
                    </label>
                    <input
                        class="stacked-input block-input"
                        type="text"
                        placeholder="Organization, company, etc"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <div class="stacked-separator" />
                </li>
                <li class="stacked-section">
                    <button class="stacked-button" type="button" on:click=search>
                        "Search"
                    </button>
                </li>
                {move || {
                    if fetching.get() {
                        return Some(view! {
                            <li class="stacked-section"><Spinner /></li>
                        }
                        .into_view());
                    }

                    results.get().map(|entities| {
                        if entities.is_empty() {
                            view! {
                                <li class="stacked-section">
                                    <p class="body-text center-text">
                                        "No organizations matched your search."
                                    </p>
                                </li>
                            }
                            .into_view()
                        } else {
                            entities
                                .into_iter()
                                .map(|entity| {
                                    let href = format!(
                                        "/app/entity/{}/join?name={}",
                                        entity.id,
                                        String::from(js_sys::encode_uri_component(&entity.name))
                                    );
                                    view! {
                                        <li class="stacked-section">
                                            <p class="body-text center-text">
                                                {entity.name.clone()}
                                                " ("
                                                <A href=href>"apply for membership"</A>
                                                ")"
                                            </p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    })
                }}
            </ul>
        </div>
    }
}
