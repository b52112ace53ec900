//! # Nexus Sessions
//!
//! Ephemeral interactive widget sessions: the multiple-choice quiz and the
//! paginated help browser.
//!
//! Sessions are pure state machines with check-and-set transitions; the
//! Discord wiring (buttons, interaction collectors, message edits) lives in
//! the commands crate. A timeout callback and a user interaction racing for
//! the same session are resolved by whichever reaches the session first;
//! the loser observes the terminal state and no-ops.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod choice;
pub mod pager;
pub mod token;

pub use choice::{ChoiceSession, ChoiceState, SelectOutcome};
pub use pager::{PagerSession, PagerState};
pub use token::{decode, encode, Control};

use std::time::Duration;

/// How long a choice session accepts an answer.
pub const CHOICE_TIMEOUT: Duration = Duration::from_secs(60);

/// How long a pager session accepts navigation, measured from creation.
/// Page turns do not renew the window.
pub const PAGER_TIMEOUT: Duration = Duration::from_secs(180);
