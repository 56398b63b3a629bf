//! Core domain types for Wordle
//!
//! Pure types and the guess evaluator. Nothing here touches I/O or global state.

mod evaluator;
mod feedback;
mod word;

pub use evaluator::evaluate;
pub use feedback::{Feedback, LetterClassification};
pub use word::{Word, WordError};
