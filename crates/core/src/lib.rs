//! Shared foundation for the record store.
//!
//! This crate contains the error taxonomy and the response envelope used by
//! every layer above the records themselves (store, dispatcher, HTTP
//! gateway, assistant). No infrastructure concerns live here.

pub mod envelope;
pub mod error;

pub use envelope::Envelope;
pub use error::{RecordError, RecordResult};
