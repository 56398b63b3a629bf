//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterClassification, Word};
use crate::game::{Row, TileState};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard layout used for letter hints
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one tile as a coloured, padded upper-case letter
#[must_use]
pub fn tile(letter: Option<char>, state: TileState) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
        TileState::Occupied => text.bright_white().bold(),
        TileState::Empty => text.bright_black(),
    }
}

/// Render a guess with its feedback as a row of tiles
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.classes())
        .map(|(&letter, &class)| tile(Some(char::from(letter)), class.into()).to_string())
        .collect()
}

/// Render a board row, `width` tiles wide
#[must_use]
pub fn row_tiles(row: &Row, width: usize) -> String {
    (0..width)
        .map(|column| {
            let t = row.tile(column);
            tile(t.letter, t.state).to_string()
        })
        .collect()
}

/// Keyboard with each letter coloured by its best known classification
#[must_use]
pub fn keyboard(hints: &FxHashMap<u8, LetterClassification>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            keys.bytes()
                .map(|key| {
                    let label = char::from(key).to_ascii_uppercase().to_string();
                    match hints.get(&key) {
                        Some(LetterClassification::Correct) => label.black().on_green(),
                        Some(LetterClassification::Present) => label.black().on_yellow(),
                        Some(LetterClassification::Absent) => label.bright_black(),
                        None => label.normal(),
                    }
                    .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
