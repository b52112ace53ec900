//! # Nexus Providers
//!
//! One module per upstream source, all satisfying the same contract: an
//! async fetch returning `Option<T>`, where `None` covers transport
//! failures, non-success statuses, and empty or malformed payloads alike.
//! Nothing here retries, caches, or propagates a raw transport error; the
//! calling command maps `None` to its "couldn't fetch X right now" reply.
//!
//! Each module keeps its payload decoding in a pure function so the parse
//! layer is testable without a network.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod activity;
pub mod animals;
pub mod canned;
pub mod client;
pub mod dictionary;
pub mod facts;
pub mod finance;
pub mod food;
pub mod github;
pub mod horoscope;
pub mod jokes;
pub mod memes;
pub mod movies;
pub mod nasa;
pub mod numbers;
pub mod quotes;
pub mod reddit;
pub mod tenor;
pub mod trivia;
pub mod wizarding;

pub use client::build_client;
