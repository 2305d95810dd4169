//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! Values are read once at startup and stay constant for the process
//! lifetime; handlers receive the config as an explicit value, not ambient
//! global state.

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: &str = "5188";

/// Root configuration for the relay.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream GraphQL endpoint and credentials.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5188").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// Upstream GraphQL endpoint configuration.
///
/// Either field may be empty when the corresponding environment variable is
/// unset. The handler checks for this per request and fails with a 500
/// rather than attempting the call.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    /// Upstream GraphQL endpoint URL.
    pub endpoint: String,

    /// Shared secret sent as the `x-hasura-admin-secret` header.
    pub admin_secret: String,
}

impl UpstreamConfig {
    /// Returns true if both the endpoint and the secret are present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.admin_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5188");
    }

    #[test]
    fn test_upstream_configured() {
        let mut upstream = UpstreamConfig::default();
        assert!(!upstream.is_configured());

        upstream.endpoint = "http://localhost:8080/v1/graphql".into();
        assert!(!upstream.is_configured()); // secret still missing

        upstream.admin_secret = "secret".into();
        assert!(upstream.is_configured());
    }
}
