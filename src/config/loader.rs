//! Configuration loading from the process environment.
//!
//! # Responsibilities
//! - Load a `.env` file into the environment at startup
//! - Read `HASURA_ENDPOINT`, `HASURA_ADMIN_SECRET`, and `PORT`
//!
//! # Design Decisions
//! - A missing `.env` file aborts startup; the service is not expected to
//!   run without one
//! - Unset endpoint/secret do NOT abort startup: they become empty strings
//!   and every request fails with a 500 until the environment is fixed

use std::env;

use crate::config::schema::{ListenerConfig, RelayConfig, UpstreamConfig, DEFAULT_PORT};
use crate::error::ConfigError;

/// Environment variable naming the upstream GraphQL endpoint.
pub const ENV_ENDPOINT: &str = "HASURA_ENDPOINT";

/// Environment variable holding the admin secret.
pub const ENV_ADMIN_SECRET: &str = "HASURA_ADMIN_SECRET";

/// Environment variable naming the listen port.
pub const ENV_PORT: &str = "PORT";

/// Load a `.env` file, then build a [`RelayConfig`] from the environment.
pub fn load() -> Result<RelayConfig, ConfigError> {
    let _ = dotenvy::dotenv()?;
    Ok(from_env())
}

/// Build a [`RelayConfig`] from whatever is already in the environment.
pub fn from_env() -> RelayConfig {
    let port = env::var(ENV_PORT).unwrap_or_else(|_| DEFAULT_PORT.to_string());

    RelayConfig {
        listener: ListenerConfig {
            bind_address: format!("0.0.0.0:{port}"),
        },
        upstream: UpstreamConfig {
            endpoint: env::var(ENV_ENDPOINT).unwrap_or_default(),
            admin_secret: env::var(ENV_ADMIN_SECRET).unwrap_or_default(),
        },
    }
}
