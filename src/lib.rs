//! Scramble
//!
//! An anagram word game: draw a root word, then build as many words as you
//! can from its letters. Each letter may be used as often as it appears in
//! the root, and longer words in longer rounds score more.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble::core::{Rules, Session};
//! use scramble::dictionary::WordSet;
//!
//! let lexicon = WordSet::from_words("en", ["vision", "stone"]);
//! let mut session =
//!     Session::new(lexicon, vec!["television".to_string()], Rules::default()).unwrap();
//!
//! assert!(session.submit("vision").is_accepted());
//! assert_eq!(session.score(), 6);
//! ```

// Core game types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
