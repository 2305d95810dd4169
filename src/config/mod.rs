//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! .env file + process environment
//!     → loader.rs (read once at startup)
//!     → schema.rs (typed RelayConfig)
//!     → passed by value into the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is constructed explicitly and injected into handlers, so tests
//!   can point the relay at a fake upstream without touching the environment
//! - Read-only after startup; no reload

pub mod loader;
pub mod schema;

pub use schema::{ListenerConfig, RelayConfig, UpstreamConfig};
