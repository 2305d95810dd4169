//! Outbound GraphQL client.
//!
//! # Responsibilities
//! - Serialize the `{query, variables}` envelope to JSON
//! - POST it to the configured endpoint with the admin-secret header
//! - Return the full response body as opaque bytes
//!
//! # Design Decisions
//! - The response status and body are never inspected; the caller relays
//!   whatever the upstream said, verbatim
//! - No request timeout is configured: a hung endpoint hangs the request.
//!   This mirrors the original service's contract and is deliberate
//! - One attempt per call, no retry

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::config::UpstreamConfig;
use crate::error::RelayError;
use crate::graphql::types::GraphqlRequest;

/// Header carrying the shared secret to the upstream.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// A destination for GraphQL calls.
///
/// This is the seam between the handler and the network: tests substitute a
/// fake implementation to exercise the handler without a real upstream.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Send one query with its variables, returning the raw response body.
    async fn send(&self, query: &str, variables: Map<String, Value>) -> Result<Bytes, RelayError>;
}

/// reqwest-backed [`UpstreamClient`] targeting a Hasura endpoint.
#[derive(Debug, Clone)]
pub struct HasuraClient {
    http: reqwest::Client,
    upstream: UpstreamConfig,
}

impl HasuraClient {
    /// Create a client for the given upstream.
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            // No timeout on purpose, see module docs.
            http: reqwest::Client::new(),
            upstream,
        }
    }
}

#[async_trait]
impl UpstreamClient for HasuraClient {
    async fn send(&self, query: &str, variables: Map<String, Value>) -> Result<Bytes, RelayError> {
        let envelope = GraphqlRequest {
            query: query.to_string(),
            variables,
        };
        let body = serde_json::to_vec(&envelope)?;

        let response = self
            .http
            .post(&self.upstream.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(ADMIN_SECRET_HEADER, &self.upstream.admin_secret)
            .body(body)
            .send()
            .await?;

        Ok(response.bytes().await?)
    }
}
