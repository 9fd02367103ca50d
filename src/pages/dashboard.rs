//! Platform Dashboard
//!
//! Fetches the session user's membership and administration relations in one
//! request, merges them by entity id, and renders one listing per entity with
//! role-appropriate actions.

use leptos::*;
use leptos_router::*;

use crate::api::operations;
use crate::components::Spinner;
use crate::model::{merge_entities, EntityListing, MembershipAction};
use crate::state::session::use_session;
use crate::state::page_title::use_page_title;

#[component]
pub fn PlatformDashboard() -> impl IntoView {
    use_page_title("Organizations");

    let session = use_session();

    let (fetching, set_fetching) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (listings, set_listings) = create_signal(Vec::<EntityListing>::new());

    create_effect(move |_| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };

        spawn_local(async move {
            let client = session.client.get_untracked();
            match operations::fetch_dashboard(&client, &user.id).await {
                Ok(data) => {
                    let mut merged =
                        merge_entities(&data.administered, &data.user.global_entities);
                    // Members first, the order the original relations arrived
                    // otherwise.
                    merged.sort_by_key(|l| !l.is_member);
                    set_listings.set(merged);
                }
                Err(e) => {
                    set_error.set(Some(e.first_message()));
                }
            }
            set_fetching.set(false);
        });
    });

    let member_email = move || {
        session
            .user
            .get()
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        {move || {
            if fetching.get() {
                return view! { <Spinner /> }.into_view();
            }

            let has_memberships = listings.with(|l| l.iter().any(|e| e.is_member));
            view! {
                <div class="bottom-padded-page">
                    <ul>
                        <li class="stacked-section">
                            <p class="body-text center-text">
                                {if has_memberships {
                                    view! {
                                        <strong>
                                            {member_email()}
                                            " has permissions to these organizations"
                                        </strong>
                                    }
                                    .into_view()
                                } else {
                                    view! {
                                        "You (" {member_email()} ") are not currently a member of \
                                         any organizations. Do you want to create or search to join \
                                         an existing organization?"
                                    }
                                    .into_view()
                                }}
                            </p>
                        </li>
                        {move || {
                            error.get().map(|msg| view! {
                                <li class="stacked-section">
                                    <div class="body-text stacked-error">{msg}</div>
                                </li>
                            })
                        }}
                        {move || {
                            listings
                                .get()
                                .into_iter()
                                .map(|listing| view! { <EntityRow listing=listing /> })
                                .collect_view()
                        }}
                        <li class="stacked-section">
                            <A href="/app/create">
                                <button class="stacked-button" type="button">
                                    "Create a new organization"
                                </button>
                            </A>
                        </li>
                        <li class="stacked-section">
                            <br />
                            <p class="body-text center-text">"- OR -"</p>
                        </li>
                        <li class="stacked-section">
                            <A href="/app/join">
                                <button class="stacked-button" type="button">
                                    "Find an existing organization to join"
                                </button>
                            </A>
                        </li>
                    </ul>
                </div>
            }
            .into_view()
        }}
    }
}

/// One entity listing: the administer action when the user administers it,
/// then exactly one membership action.
#[component]
fn EntityRow(listing: EntityListing) -> impl IntoView {
    let session = use_session();
    let hint = String::from(js_sys::encode_uri_component(&listing.name));

    let administer = listing.is_admin.then(|| {
        let href = format!("/app/entity/{}/administer?name={}", listing.id, hint);
        view! {
            <A href=href>"edit this organization"</A>
            " | "
        }
    });

    let membership = match listing.membership_action() {
        MembershipAction::EditMembership => {
            let user_id = session
                .user
                .get_untracked()
                .map(|u| u.id)
                .unwrap_or_default();
            let href = format!("/app/entity/{}/membership/{}/edit", listing.id, user_id);
            view! { <A href=href>"edit my membership"</A> }.into_view()
        }
        MembershipAction::ApplyForMembership => {
            let href = format!("/app/entity/{}/join?name={}", listing.id, hint);
            view! { <A href=href>"apply for membership"</A> }.into_view()
        }
        MembershipAction::Join => {
            let href = format!("/app/entity/{}/join?name={}", listing.id, hint);
            view! { <A href=href>"join"</A> }.into_view()
        }
    };

    view! {
        <li class="stacked-section">
            <p class="body-text center-text">
                {listing.name.clone()} " (" {administer} {membership} ")"
            </p>
        </li>
    }
}
