//! # Nexus Registry
//!
//! The durable user registry gating most InfoNexus commands.
//!
//! The registry is a single JSON object file mapping stringified Discord
//! user ids to registration records. The whole file is read on every lookup
//! and rewritten on every insert; there is deliberately no in-memory cache
//! and no lock, so interleaved writers race with last-save-wins semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod record;
pub mod store;

pub use record::RegistrationRecord;
pub use store::{StorageError, UserRegistry};
