//! Word lists for the anagram game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
