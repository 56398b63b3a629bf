//! Embedded word lists
//!
//! Word lists compiled into the binary from `data/`.

/// All words accepted as guesses, one per line
pub const VALID_WORDS: &str = include_str!("../../data/valid_words.txt");

/// Words eligible to be chosen as the secret, one per line
pub const SOLUTIONS: &str = include_str!("../../data/solutions.txt");
