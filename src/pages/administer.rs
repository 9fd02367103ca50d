//! Administer-Organization Page
//!
//! Fetches the entity and lists its administrator roster. The hinted name
//! (when navigation supplied one) titles the page ahead of the fetch.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::Spinner;
use crate::model::GlobalEntity;
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

#[component]
pub fn AdministerEntity() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let entity_id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
    let hinted_name = query.with_untracked(|q| q.get("name").cloned());

    let title = match &hinted_name {
        Some(name) => format!("Administer {}", name),
        None => "Administer".to_string(),
    };
    use_page_title(title);

    let session = use_session();

    let (fetching, set_fetching) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (entity, set_entity) = create_signal(None::<GlobalEntity>);

    create_effect(move |_| {
        let entity_id = entity_id.clone();
        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::fetch_entity(&client, &entity_id).await {
                Ok(Some(found)) => set_entity.set(Some(found)),
                Ok(None) => set_error.set(Some("Organization not found.".to_string())),
                Err(e) => set_error.set(Some(e.first_message())),
            }
            set_fetching.set(false);
        });
    });

    view! {
        {move || {
            if fetching.get() {
                return view! { <Spinner /> }.into_view();
            }

            if let Some(msg) = error.get() {
                return view! {
                    <div class="body-text stacked-error">{msg}</div>
                }
                .into_view();
            }

            entity
                .get()
                .map(|entity| {
                    view! {
                        <div class="bottom-padded-page">
                            <ul>
                                <li class="stacked-section">
                                    <p class="body-text center-text">
                                        <strong>{entity.name.clone()}</strong>
                                        " is administered by"
                                    </p>
                                </li>
                                {entity
                                    .administered_by_users
                                    .iter()
                                    .map(|admin| view! {
                                        <li class="stacked-section">
                                            <p class="body-text center-text">
                                                {admin.email.clone()}
                                            </p>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .into_view()
        }}
    }
}
