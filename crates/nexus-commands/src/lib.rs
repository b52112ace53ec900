//! # Nexus Commands
//!
//! Discord command implementations for the InfoNexus bot, built on the
//! Poise framework.
//!
//! Every command is a thin wrapper: one provider call, one formatted embed.
//! Access control runs as guard composition at the dispatcher (see
//! [`framework`]), not as per-command annotations; the two interactive
//! commands ([`trivia`] and [`what`]) drive the session state machines from
//! `nexus-sessions` through component interaction collectors.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unused_async)]

pub mod about;
pub mod animals;
pub mod canned;
pub mod dev;
pub mod finance;
pub mod framework;
pub mod fun;
pub mod knowledge;
pub mod media;
pub mod register;
pub mod remind;
pub mod respond;
pub mod trivia;
pub mod uptime;
pub mod what;

pub use framework::{all_commands, on_error, run_guards, Context, Data, Error};
