//! GraphQL client plumbing
//!
//! A small transport seam over `reqwest` so the runner can be driven by a
//! scripted transport in tests.

mod client;
mod types;

pub use client::{GraphQLTransport, HttpTransport};
pub use types::{GraphQLRequest, GraphQLResponse};

#[cfg(test)]
pub(crate) use client::mock;
