//! GraphQL forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! handler (decoded input)
//!     → types.rs (fixed mutation + variables envelope)
//!     → client.rs (POST to upstream with admin-secret header)
//!     → raw response bytes back to the handler
//! ```

pub mod client;
pub mod types;

pub use client::{HasuraClient, UpstreamClient, ADMIN_SECRET_HEADER};
pub use types::{GraphqlRequest, InsertUserInput, INSERT_USER_MUTATION};
