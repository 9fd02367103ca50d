//! GraphQL Transport
//!
//! A thin client over `gloo_net` for the hosted GraphQL endpoint. The client
//! is bound to a credential at construction; swapping credentials means
//! building a new client, which the session module does on log-in/log-out.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The single hosted GraphQL endpoint used by every operation.
pub const ENDPOINT: &str = "https://api.graph.cool/simple/v1/cjtk5v9f35czw0182ieos4y98";

/// GraphQL transport handle bound to either an anonymous or bearer-token
/// credential.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQlClient {
    endpoint: String,
    token: Option<String>,
}

impl GraphQlClient {
    pub fn anonymous() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            token: None,
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            token: Some(token.to_string()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Execute one operation. GraphQL-level errors in an otherwise successful
    /// response surface as [`ApiError::GraphQl`]; a missing `data` field with
    /// no errors is a malformed response.
    pub async fn execute<V, D>(&self, query: &str, variables: &V) -> Result<D, ApiError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let body = GraphQlRequest { query, variables };

        let mut request = gloo_net::http::Request::post(&self.endpoint);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let envelope: GraphQlResponse<D> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let result = envelope.into_result();
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("GraphQL operation failed: {}", e).into());
        }
        result
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de>"))]
pub struct GraphQlResponse<D> {
    #[serde(default)]
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<D> GraphQlResponse<D> {
    pub fn into_result(self) -> Result<D, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(self.errors));
        }
        self.data
            .ok_or_else(|| ApiError::Parse("response carried neither data nor errors".to_string()))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
}

/// Failure taxonomy for one GraphQL operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Http(u16),
    #[error("{}", first_graphql_message(.0))]
    GraphQl(Vec<GraphQlError>),
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// First reported error message, verbatim, for inline display next to
    /// the form that triggered the request.
    pub fn first_message(&self) -> String {
        self.to_string()
    }
}

fn first_graphql_message(errors: &[GraphQlError]) -> String {
    errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "unknown GraphQL error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn test_envelope_with_data() {
        let envelope: GraphQlResponse<Payload> =
            serde_json::from_str(r#"{"data": {"value": 7}}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Payload { value: 7 });
    }

    #[test]
    fn test_envelope_errors_win_over_data() {
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "No user found with that information"},
                                         {"message": "second"}]}"#,
        )
        .unwrap();

        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.first_message(), "No user found with that information");
    }

    #[test]
    fn test_empty_envelope_is_malformed() {
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(envelope.into_result(), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_credential_swap_builds_distinct_clients() {
        let anon = GraphQlClient::anonymous();
        let authed = GraphQlClient::with_token("tok-123");
        assert!(!anon.is_authenticated());
        assert!(authed.is_authenticated());
        assert_ne!(anon, authed);
    }
}
