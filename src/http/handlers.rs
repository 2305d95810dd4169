//! Request handler for `POST /graphql`.
//!
//! # Responsibilities
//! - Decode the inbound `{name, age}` body
//! - Check upstream configuration is present
//! - Delegate to the upstream client with the fixed mutation
//! - Relay the raw upstream bytes as the response body

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::graphql::types::{InsertUserInput, INSERT_USER_MUTATION};
use crate::http::server::AppState;

/// Forward one inbound request to the upstream GraphQL endpoint.
///
/// Status contract: 400 on an undecodable body, 500 on missing configuration
/// or a failed upstream call, otherwise 200 with the upstream body relayed
/// verbatim. The upstream's own status code is not inspected.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let input: InsertUserInput = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(request_id = %request_id, error = %e, "Rejecting undecodable body");
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    if !state.config.upstream.is_configured() {
        tracing::error!(request_id = %request_id, "Upstream endpoint or admin secret not configured");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
    }

    tracing::debug!(
        request_id = %request_id,
        name = %input.name,
        age = input.age,
        "Forwarding insert_users mutation"
    );

    match state
        .upstream
        .send(INSERT_USER_MUTATION, input.into_variables())
        .await
    {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream call failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "GraphQL query failed").into_response()
        }
    }
}
