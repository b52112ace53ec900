//! # Nexus Bot
//!
//! The InfoNexus Discord bot binary crate. Wires configuration, the user
//! registry, and the command catalog into a Poise framework and runs the
//! gateway client until shutdown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::InfoNexusBot;
pub use error::{BotError, BotResult};
