//! # Nexus Common
//!
//! Shared types and utilities for the InfoNexus bot workspace.
//!
//! This crate provides the error taxonomy, the immutable startup context,
//! and the formatting helpers used across all other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

pub use types::*;
pub use utils::*;
