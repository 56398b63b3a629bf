//! Guess evaluation
//!
//! Classifies every letter of a guess against the secret using Wordle's
//! duplicate-letter rule.

use super::{Feedback, LetterClassification, Word};
use crate::error::LengthMismatchError;
use tracing::debug;

/// Evaluate `guess` against `secret`
///
/// Both words are already normalized, so comparison is byte-exact.
///
/// # Algorithm
/// 1. `remaining` starts as the secret's letters, by position
/// 2. First pass: exact matches are Correct and claim their secret position
/// 3. Second pass, left to right: a letter found in `remaining` is Present and
///    claims the first unclaimed occurrence; otherwise it is Absent
///
/// The second pass only sees `remaining` as depleted by earlier claims, so a
/// letter is never marked more often than it occurs in the secret.
///
/// # Errors
/// Returns `LengthMismatchError` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_board::core::{Word, evaluate};
///
/// let secret = Word::new("erase").unwrap();
/// let guess = Word::new("speed").unwrap();
/// let feedback = evaluate(&secret, &guess).unwrap();
///
/// // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
/// assert_eq!(feedback.to_string(), "Y-YY-");
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Feedback, LengthMismatchError> {
    if secret.len() != guess.len() {
        return Err(LengthMismatchError {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let secret_letters = secret.letters();
    let guess_letters = guess.letters();

    let mut remaining: Vec<Option<u8>> = secret_letters.iter().copied().map(Some).collect();
    let mut result: Vec<Option<LetterClassification>> = vec![None; guess_letters.len()];

    // First pass: exact matches
    for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
        if g == s {
            result[i] = Some(LetterClassification::Correct);
            remaining[i] = None;
        }
    }

    // Second pass: misplaced letters, bounded by what is still unclaimed
    for (i, &g) in guess_letters.iter().enumerate() {
        if result[i].is_some() {
            continue;
        }
        let class = match remaining.iter().position(|&slot| slot == Some(g)) {
            Some(claimed) => {
                remaining[claimed] = None;
                LetterClassification::Present
            }
            None => LetterClassification::Absent,
        };
        result[i] = Some(class);
    }

    let feedback = Feedback::new(
        result
            .into_iter()
            .map(|class| class.unwrap_or(LetterClassification::Absent))
            .collect(),
    );
    debug!(%secret, %guess, %feedback, "evaluated guess");
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::LetterClassification::{Absent, Correct, Present};
    use super::*;

    fn eval(secret: &str, guess: &str) -> Feedback {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn evaluate_identical_words_is_win() {
        let fb = eval("apple", "apple");
        assert_eq!(fb.classes(), &[Correct; 5]);
        assert!(fb.is_win());
    }

    #[test]
    fn evaluate_apple_angle() {
        let fb = eval("apple", "angle");
        assert_eq!(fb.classes(), &[Correct, Absent, Absent, Correct, Correct]);
        assert!(!fb.is_win());
    }

    #[test]
    fn evaluate_all_absent() {
        let fb = eval("fghij", "abcde");
        assert_eq!(fb.classes(), &[Absent; 5]);
    }

    #[test]
    fn evaluate_duplicate_guess_letters_bounded_by_secret() {
        // ERASE holds two E's, so both E's of SPEED are yellow; S is at
        // position 3 of ERASE, so yellow as well
        let fb = eval("erase", "speed");
        assert_eq!(fb.classes(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn evaluate_exact_match_claims_before_misplaced() {
        // The final E is green and uses up the only E in CRANE
        let fb = eval("crane", "eerie");
        assert_eq!(fb.classes(), &[Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn evaluate_green_and_yellow_of_same_letter() {
        // ROBOT vs FLOOR: second O green, first O yellow
        let fb = eval("floor", "robot");
        assert_eq!(fb.classes(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluate_repeated_secret_letter() {
        let fb = eval("apple", "paper");
        assert_eq!(fb.classes(), &[Present, Present, Correct, Present, Absent]);
    }

    #[test]
    fn evaluate_surplus_letters_become_absent() {
        // Only one L in the secret; the second L in the guess is gray
        let fb = eval("world", "llama");
        assert_eq!(fb.classes(), &[Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn evaluate_other_lengths() {
        assert_eq!(eval("ab", "ba").classes(), &[Present, Present]);
        assert!(eval("banana", "banana").is_win());
    }

    #[test]
    fn evaluate_length_mismatch() {
        let secret = Word::new("apple").unwrap();
        let guess = Word::new("apples").unwrap();
        assert_eq!(
            evaluate(&secret, &guess),
            Err(LengthMismatchError {
                secret: 5,
                guess: 6
            })
        );
    }
}
