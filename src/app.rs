//! App Root Component
//!
//! Router, session/page-title providers, and the authenticated-section guard.

use leptos::*;
use leptos_router::*;

use crate::components::DebugHeader;
use crate::pages::{
    AdministerEntity, Create, EntityJoin, Index, Join, LogIn, PlatformDashboard, SignUp,
};
use crate::routing::{self, GuardOutcome};
use crate::state::{provide_page_title, provide_session, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Everything that needs router context: providers, chrome, routes.
#[component]
fn Shell() -> impl IntoView {
    provide_session();
    provide_page_title();

    view! {
        <div class="app">
            <DebugHeader />
            <main>
                <Routes>
                    <Route path="/" view=Index />
                    <Route path="/sign-up" view=SignUp />
                    <Route path="/log-in" view=LogIn />
                    <Route path="/app" view=Protected>
                        <Route path="" view=PlatformDashboard />
                        <Route path="create" view=Create />
                        <Route path="join" view=Join />
                        <Route path="entity/:id/join" view=EntityJoin />
                        <Route path="entity/:id/administer" view=AdministerEntity />
                    </Route>
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </div>
    }
}

/// Guard for the authenticated section. Without a token, redirects to the
/// log-in view carrying the originally requested path as `?from=` context.
#[component]
fn Protected() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    view! {
        {move || {
            let path = location.pathname.get();
            match routing::guard(&path, session.is_authenticated()) {
                GuardOutcome::Allow => view! { <Outlet /> }.into_view(),
                GuardOutcome::RedirectToLogIn { original_path } => {
                    let target = match original_path {
                        Some(from) => format!(
                            "/log-in?from={}",
                            String::from(js_sys::encode_uri_component(&from))
                        ),
                        None => routing::LOG_IN_PATH.to_string(),
                    };
                    view! { <Redirect path=target /> }.into_view()
                }
            }
        }}
    }
}

/// 404 for paths no route claims.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="body-text center-text">
            <h1>"Page Not Found"</h1>
            <p>
                <A href="/">"Back to the entry flows"</A>
            </p>
        </div>
    }
}
