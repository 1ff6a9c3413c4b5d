//! Core game types
//!
//! This module contains the session state machine and its supporting domain
//! types. Everything here is pure: randomness and the dictionary oracle are
//! injected, so the whole game is testable without a terminal.

mod letters;
mod outcome;
mod session;

pub use letters::LetterPool;
pub use outcome::{Outcome, Rejection, Rules};
pub use session::{Session, SetupError};
