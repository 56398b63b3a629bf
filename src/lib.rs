//! Wordle Board
//!
//! A Wordle-style guessing game: a pure evaluation core, immutable word lists,
//! an explicit session state machine, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::{Word, evaluate};
//!
//! let secret = Word::new("apple").unwrap();
//! let guess = Word::new("angle").unwrap();
//!
//! let feedback = evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.to_string(), "G--GG");
//! assert_eq!(feedback.to_emoji(), "🟩⬜⬜🟩🟩");
//! ```

// Core domain types and guess evaluation
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Session state machine
pub mod game;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
