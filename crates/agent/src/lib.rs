//! `stockroom-agent`
//!
//! **Responsibility:** Natural-language front end for the gateway.
//!
//! This crate is intentionally **not** part of the record store:
//! - It never touches the snapshot or the record types directly.
//! - It talks to the gateway over HTTP like any other client.
//! - What it adds is the text-to-action boundary and a readable rendering
//!   of response envelopes.

pub mod client;
pub mod error;
pub mod extract;
pub mod llm;
pub mod render;
pub mod resolver;

pub use client::ErpClient;
pub use error::AgentError;
pub use llm::{LlmConfig, LlmResolver};
pub use resolver::{ActionResolver, ResolvedAction};
