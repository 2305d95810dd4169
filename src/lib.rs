//! HTTP-to-GraphQL relay.
//!
//! Accepts a fixed-shape JSON request on `POST /graphql`, builds a single
//! hard-coded `InsertUser` mutation, forwards it to a configured Hasura
//! endpoint with an admin-secret header, and relays the raw upstream
//! response back to the caller.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────┐
//!                   │                 RELAY                     │
//!                   │                                           │
//!   Client Request  │  ┌─────────┐     ┌───────────────────┐   │
//!   ────────────────┼─▶│  http   │────▶│  graphql client   │───┼──▶ Hasura
//!                   │  │ handler │     │ (fixed mutation)  │   │    endpoint
//!   Client Response │  └─────────┘     └───────────────────┘   │
//!   ◀───────────────┼── raw upstream bytes, verbatim ◀─────────┼───
//!                   │                                           │
//!                   │  ┌─────────────────────────────────────┐  │
//!                   │  │  config (env, read once at startup) │  │
//!                   │  └─────────────────────────────────────┘  │
//!                   └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;

pub use config::RelayConfig;
pub use error::{ConfigError, RelayError};
pub use http::HttpServer;
