//! # Nexus Config
//!
//! Environment-driven configuration for the InfoNexus bot.
//!
//! All required values (the Discord token and the upstream API keys) come
//! from the process environment; a missing value is a fatal startup error
//! reported before the event loop starts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
