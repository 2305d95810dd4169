//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, middleware)
//!     → handlers.rs (decode body, check config, forward)
//!     → graphql client (outbound POST)
//!     → raw upstream bytes sent back to the client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
