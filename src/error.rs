//! Error types for the relay.
//!
//! # Design Decisions
//! - Upstream failures are opaque to the caller: the handler maps every
//!   variant to a 500 with a short generic message, never the source detail
//! - Transport errors don't distinguish "upstream down" from "upstream
//!   rejected the query"; both terminate the request the same way

use thiserror::Error;

/// Failures while forwarding a call to the upstream GraphQL endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The outbound HTTP round-trip failed (DNS, connect, read).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The GraphQL envelope could not be serialized.
    #[error("failed to encode graphql payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.env` file could not be loaded. Startup aborts on this.
    #[error("can't load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RelayError::from(source);
        assert!(err.to_string().starts_with("failed to encode graphql payload"));
    }

    #[test]
    fn test_env_file_error_message() {
        let source = dotenvy::from_filename("definitely-missing.env").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("can't load env file"));
    }
}
