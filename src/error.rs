//! Error types shared across the crate
//!
//! Invalid guesses are deliberately absent here: a word missing from the
//! valid-guess list is an ordinary rejected submission, not a failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A word list could not be turned into a usable [`WordList`](crate::wordlists::WordList)
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{name}' contains no words")]
    Empty { name: String },

    #[error("word list '{name}' mixes word lengths: expected {expected} letters, found '{word}'")]
    MixedLengths {
        name: String,
        expected: usize,
        word: String,
    },

    #[error("valid words have {valid} letters but solutions have {solutions}")]
    LengthMismatch { valid: usize, solutions: usize },
}

/// Secret and guess lengths differ; always a caller bug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot evaluate a {guess}-letter guess against a {secret}-letter secret")]
pub struct LengthMismatchError {
    pub secret: usize,
    pub guess: usize,
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a board needs at least one row")]
    ZeroRows,
}

/// A session could not be set up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("secret does not fit the board: {0}")]
    LengthMismatch(#[from] LengthMismatchError),
}
