//! Durable Storage
//!
//! Browser local storage is the sole persistence layer. Three keys are used,
//! with no versioning or migration: `token`, `user` (JSON-encoded user
//! record), and `log-in-email-last-attempt`.

use crate::model::UserRecord;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LAST_EMAIL_KEY: &str = "log-in-email-last-attempt";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read a raw string entry. `None` when storage is unavailable or unset.
pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Read the stored user record. An unparseable entry is treated as absent
/// rather than an error; the record is opaque payload from the GraphQL layer.
pub fn get_user() -> Option<UserRecord> {
    get_item(USER_KEY).and_then(|json| serde_json::from_str(&json).ok())
}

/// Persist the user record as JSON under the `user` key.
pub fn set_user(user: &UserRecord) {
    if let Ok(json) = serde_json::to_string(user) {
        set_item(USER_KEY, &json);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{EntityRef, UserRecord};

    #[test]
    fn test_user_round_trips_through_json() {
        let user = UserRecord {
            id: "u-1".to_string(),
            email: "pat@example.com".to_string(),
            global_entities: vec![EntityRef {
                id: "e-1".to_string(),
                name: "Acme Kilns".to_string(),
            }],
        };

        let json = serde_json::to_string(&user).unwrap();
        let restored: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_user_json_uses_wire_field_names() {
        // The durable entry mirrors the GraphQL payload, camelCase included.
        let user = UserRecord {
            id: "u-1".to_string(),
            email: "pat@example.com".to_string(),
            global_entities: vec![],
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"globalEntities\""));
    }
}
