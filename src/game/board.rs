//! Board rows and tiles

use crate::core::{Feedback, LetterClassification};

/// Visual state of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Empty,
    /// Holds a letter that has not been scored
    Occupied,
    Correct,
    Present,
    Absent,
}

impl From<LetterClassification> for TileState {
    fn from(class: LetterClassification) -> Self {
        match class {
            LetterClassification::Correct => Self::Correct,
            LetterClassification::Present => Self::Present,
            LetterClassification::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

/// One board row: typed letters and, once submitted, their feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: String,
    feedback: Option<Feedback>,
}

impl Row {
    /// Letters typed so far, lower-case
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// Tile at `column`
    #[must_use]
    pub fn tile(&self, column: usize) -> Tile {
        let letter = self.letters.as_bytes().get(column).map(|&b| char::from(b));
        let state = match (letter, self.feedback.as_ref().and_then(|f| f.get(column))) {
            (_, Some(class)) => class.into(),
            (Some(_), None) => TileState::Occupied,
            (None, None) => TileState::Empty,
        };
        Tile { letter, state }
    }

    pub(crate) fn push(&mut self, letter: char) {
        self.letters.push(letter);
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.letters.len()
    }

    pub(crate) fn score(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_tiles() {
        let row = Row::default();
        assert_eq!(
            row.tile(0),
            Tile {
                letter: None,
                state: TileState::Empty
            }
        );
    }

    #[test]
    fn typed_letters_are_occupied() {
        let mut row = Row::default();
        row.push('c');
        row.push('r');
        assert_eq!(row.tile(1).letter, Some('r'));
        assert_eq!(row.tile(1).state, TileState::Occupied);
        assert_eq!(row.tile(2).state, TileState::Empty);
        assert_eq!(row.pop(), Some('r'));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn scored_row_uses_feedback() {
        let mut row = Row::default();
        for ch in "ab".chars() {
            row.push(ch);
        }
        row.score(Feedback::parse("GY").unwrap());
        assert!(row.is_submitted());
        assert_eq!(row.tile(0).state, TileState::Correct);
        assert_eq!(row.tile(1).state, TileState::Present);
    }
}
