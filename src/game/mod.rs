//! Game session state machine
//!
//! A [`Session`] consumes one discrete [`Input`] at a time and reports what
//! happened as an [`Outcome`]. Rendering and input timing live elsewhere.

mod board;
mod session;
mod stats;

pub use board::{Row, Tile, TileState};
pub use session::Session;
pub use stats::Statistics;

use crate::core::{Feedback, Word};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Typing into the current row
    AwaitingInput,
    /// A row was just scored and the game goes on
    RowSubmitted,
    /// Last submitted row was all Correct
    Won,
    /// Every row used without a win
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
}

/// Result of feeding an [`Input`] to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LetterAdded(char),
    LetterRemoved,
    /// Submitted word is not in the valid-guess list; nothing changed
    Rejected(Word),
    /// Row evaluated; the session moved to the next row or ended
    Scored(Feedback),
    /// Input had no effect in the current state
    Ignored,
}
