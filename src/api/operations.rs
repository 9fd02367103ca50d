//! GraphQL Operations
//!
//! One function per operation; each page issues at most one of these.

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiError, GraphQlClient};
use crate::model::{EntityRef, GlobalEntity, UserRecord};

const SIGN_UP: &str = r#"
mutation AttemptSignUp($email: String!, $password: String!) {
  createUser(authProvider: { email: { email: $email, password: $password } }) {
    id
    email
  }
}
"#;

const LOG_IN: &str = r#"
mutation AttemptLogIn($email: String!, $password: String!) {
  signinUser(email: { email: $email, password: $password }) {
    token
    user {
      id
      email
      globalEntities {
        id
        name
      }
    }
  }
}
"#;

const CREATE_GLOBAL_ENTITY: &str = r#"
mutation ($name: String!, $administeredByUsers: [ID!]!, $createdByUser: ID!) {
  createGlobalEntity(name: $name, createdById: $createdByUser, administeredByUsersIds: $administeredByUsers) {
    id
    name
  }
}
"#;

const DASHBOARD: &str = r#"
query GetMyGlobalEntities($userId: ID!) {
  User(id: $userId) {
    globalEntities {
      id
      name
    }
  }
  allGlobalEntities(filter: { administeredByUsers_some: { id: $userId } }) {
    id
    name
    administeredByUsers {
      id
      email
    }
  }
}
"#;

const SEARCH_ENTITIES: &str = r#"
query SearchGlobalEntities($query: String!) {
  allGlobalEntities(filter: { name_contains: $query }) {
    id
    name
  }
}
"#;

const ENTITY: &str = r#"
query GetGlobalEntity($entityId: ID!) {
  GlobalEntity(id: $entityId) {
    id
    name
    administeredByUsers {
      id
      email
    }
  }
}
"#;

const JOIN_ENTITY: &str = r#"
mutation JoinGlobalEntity($entityId: ID!, $userId: ID!) {
  addToUsersGlobalEntities(globalEntitiesGlobalEntityId: $entityId, usersUserId: $userId) {
    usersUser {
      id
    }
  }
}
"#;

#[derive(Serialize)]
struct CredentialVars<'a> {
    email: &'a str,
    password: &'a str,
}

/// New account as returned by the sign-up mutation. Sign-up does not log the
/// user in; it hands the preferred email to the log-in view.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedUser {
    pub id: String,
    pub email: String,
}

pub async fn sign_up(
    client: &GraphQlClient,
    email: &str,
    password: &str,
) -> Result<CreatedUser, ApiError> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "createUser")]
        create_user: CreatedUser,
    }

    let data: Data = client
        .execute(SIGN_UP, &CredentialVars { email, password })
        .await?;
    Ok(data.create_user)
}

/// Token plus user payload from a successful log-in.
#[derive(Clone, Debug, Deserialize)]
pub struct SignInPayload {
    pub token: String,
    pub user: UserRecord,
}

pub async fn log_in(
    client: &GraphQlClient,
    email: &str,
    password: &str,
) -> Result<SignInPayload, ApiError> {
    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "signinUser")]
        signin_user: SignInPayload,
    }

    let data: Data = client
        .execute(LOG_IN, &CredentialVars { email, password })
        .await?;
    Ok(data.signin_user)
}

pub async fn create_global_entity(
    client: &GraphQlClient,
    name: &str,
    user_id: &str,
) -> Result<EntityRef, ApiError> {
    #[derive(Serialize)]
    struct Vars<'a> {
        name: &'a str,
        #[serde(rename = "administeredByUsers")]
        administered_by_users: Vec<&'a str>,
        #[serde(rename = "createdByUser")]
        created_by_user: &'a str,
    }

    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "createGlobalEntity")]
        create_global_entity: EntityRef,
    }

    let data: Data = client
        .execute(
            CREATE_GLOBAL_ENTITY,
            &Vars {
                name,
                administered_by_users: vec![user_id],
                created_by_user: user_id,
            },
        )
        .await?;
    Ok(data.create_global_entity)
}

/// The two entity relations, fetched in one request and merged client-side.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardData {
    #[serde(rename = "User")]
    pub user: MemberEntities,
    #[serde(rename = "allGlobalEntities")]
    pub administered: Vec<GlobalEntity>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MemberEntities {
    #[serde(rename = "globalEntities", default)]
    pub global_entities: Vec<EntityRef>,
}

pub async fn fetch_dashboard(
    client: &GraphQlClient,
    user_id: &str,
) -> Result<DashboardData, ApiError> {
    #[derive(Serialize)]
    struct Vars<'a> {
        #[serde(rename = "userId")]
        user_id: &'a str,
    }

    client.execute(DASHBOARD, &Vars { user_id }).await
}

pub async fn search_entities(
    client: &GraphQlClient,
    query: &str,
) -> Result<Vec<EntityRef>, ApiError> {
    #[derive(Serialize)]
    struct Vars<'a> {
        query: &'a str,
    }

    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "allGlobalEntities")]
        all_global_entities: Vec<EntityRef>,
    }

    let data: Data = client.execute(SEARCH_ENTITIES, &Vars { query }).await?;
    Ok(data.all_global_entities)
}

pub async fn fetch_entity(
    client: &GraphQlClient,
    entity_id: &str,
) -> Result<Option<GlobalEntity>, ApiError> {
    #[derive(Serialize)]
    struct Vars<'a> {
        #[serde(rename = "entityId")]
        entity_id: &'a str,
    }

    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "GlobalEntity")]
        global_entity: Option<GlobalEntity>,
    }

    let data: Data = client.execute(ENTITY, &Vars { entity_id }).await?;
    Ok(data.global_entity)
}

pub async fn join_entity(
    client: &GraphQlClient,
    entity_id: &str,
    user_id: &str,
) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct Vars<'a> {
        #[serde(rename = "entityId")]
        entity_id: &'a str,
        #[serde(rename = "userId")]
        user_id: &'a str,
    }

    #[derive(Deserialize)]
    struct Data {
        #[serde(rename = "addToUsersGlobalEntities")]
        #[allow(dead_code)]
        added: serde_json::Value,
    }

    let _: Data = client
        .execute(JOIN_ENTITY, &Vars { entity_id, user_id })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_payload_parses_wire_shape() {
        let json = r#"{
            "signinUser": {
                "token": "tok-abc",
                "user": {
                    "id": "u-1",
                    "email": "pat@example.com",
                    "globalEntities": [{"id": "e-1", "name": "Acme Kilns"}]
                }
            }
        }"#;

        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "signinUser")]
            signin_user: SignInPayload,
        }

        let data: Data = serde_json::from_str(json).unwrap();
        assert_eq!(data.signin_user.token, "tok-abc");
        assert_eq!(data.signin_user.user.global_entities.len(), 1);
    }

    #[test]
    fn test_dashboard_data_parses_both_relations() {
        let json = r#"{
            "User": {"globalEntities": [{"id": "e-1", "name": "Acme"}]},
            "allGlobalEntities": [
                {"id": "e-2", "name": "Forge Co",
                 "administeredByUsers": [{"id": "u-1", "email": "pat@example.com"}]}
            ]
        }"#;

        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.user.global_entities.len(), 1);
        assert_eq!(data.administered.len(), 1);
        assert_eq!(data.administered[0].administered_by_users[0].id, "u-1");
    }
}
