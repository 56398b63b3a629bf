//! One-shot guess evaluation
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::WordLists;
use anyhow::{Context, Result};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether a game would accept this guess
    pub guess_is_valid: bool,
}

/// Evaluate `guess` against `secret`
///
/// The guess does not have to be in the valid-guess list; membership is
/// reported in the result instead.
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_guess(secret: &str, guess: &str, lists: &WordLists) -> Result<CheckResult> {
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let feedback = evaluate(&secret, &guess)?;
    let guess_is_valid = lists.is_valid_guess(guess.text());

    Ok(CheckResult {
        secret,
        guess,
        feedback,
        guess_is_valid,
    })
}
