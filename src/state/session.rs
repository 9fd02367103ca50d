//! Session Store
//!
//! The in-memory bundle of transport handle, auth token, and current user,
//! owned by the application root for its lifetime. Durable storage mirrors
//! `token` and `user` as a side effect; the in-memory copy is authoritative.
//!
//! Two states: Anonymous (no token) and Authenticated (token + user). On
//! start the state derives synchronously from durable storage, with no
//! server-side verification of a found token.

use leptos::*;

use crate::api::GraphQlClient;
use crate::model::UserRecord;
use crate::storage;

/// Session state provided to all components.
#[derive(Clone, Copy)]
pub struct Session {
    pub client: RwSignal<GraphQlClient>,
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<UserRecord>>,
}

impl Session {
    /// Derive the starting state from durable storage. A stored token starts
    /// the session Authenticated and binds the transport to it immediately.
    fn restore() -> Self {
        let token = storage::get_item(storage::TOKEN_KEY);
        let user = storage::get_user();
        let client = match &token {
            Some(token) => GraphQlClient::with_token(token),
            None => GraphQlClient::anonymous(),
        };

        Self {
            client: create_rw_signal(client),
            token: create_rw_signal(token),
            user: create_rw_signal(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Atomically swap in the new credential: persist token and user, rebuild
    /// the transport, then replace the in-memory state.
    pub fn log_in(&self, token: String, user: UserRecord) {
        storage::set_item(storage::TOKEN_KEY, &token);
        storage::set_user(&user);

        self.client.set(GraphQlClient::with_token(&token));
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Clear durable entries and return to the anonymous credential.
    pub fn log_out(&self) {
        storage::remove_item(storage::TOKEN_KEY);
        storage::remove_item(storage::USER_KEY);

        self.client.set(GraphQlClient::anonymous());
        self.token.set(None);
        self.user.set(None);
    }
}

/// Provide the session, restored from durable storage, to the component tree.
pub fn provide_session() -> Session {
    let session = Session::restore();
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}
