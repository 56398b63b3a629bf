//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one [`LetterClassification`]:
//! - Correct: letter in the right position (green, `G`)
//! - Present: letter in the secret but elsewhere (yellow, `Y`)
//! - Absent: letter not in the secret, or all its occurrences already claimed (gray, `-`)

use std::fmt;

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClassification {
    Absent,
    Present,
    Correct,
}

impl LetterClassification {
    /// Single-character pattern symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single symbol; accepts G/Y/- in either case, `_`, and the emoji squares
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Ordered classification of every letter of a guess
///
/// Entry `i` describes letter `i` of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterClassification>);

impl Feedback {
    /// Wrap an already computed classification sequence
    #[must_use]
    pub fn new(classes: Vec<LetterClassification>) -> Self {
        Self(classes)
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[LetterClassification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classification at `position`, if in range
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterClassification> {
        self.0.get(position).copied()
    }

    /// True when every position is Correct
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Word, evaluate};
    ///
    /// let apple = Word::new("apple").unwrap();
    /// assert!(evaluate(&apple, &apple).unwrap().is_win());
    /// ```
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&c| c == LetterClassification::Correct)
    }

    /// Count of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterClassification::Correct)
    }

    /// Count of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClassification::Present)
    }

    fn count(&self, class: LetterClassification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse a pattern such as `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GXG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(LetterClassification::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert to an emoji string like `"🟩🟨⬜🟩🟨"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::LetterClassification::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn feedback_win_requires_all_correct() {
        assert!(Feedback::new(vec![Correct; 5]).is_win());
        assert!(!Feedback::new(vec![Correct, Correct, Present, Correct, Correct]).is_win());
    }

    #[test]
    fn feedback_counts() {
        let fb = Feedback::new(vec![Present, Correct, Correct, Present, Absent]);
        assert_eq!(fb.count_correct(), 2);
        assert_eq!(fb.count_present(), 2);
        assert_eq!(fb.len(), 5);
        assert_eq!(fb.get(4), Some(Absent));
        assert_eq!(fb.get(5), None);
    }

    #[test]
    fn feedback_parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.classes(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("G?".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_display_and_emoji() {
        let fb = Feedback::new(vec![Correct, Present, Absent]);
        assert_eq!(fb.to_string(), "GY-");
        assert_eq!(fb.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn classification_ordering_ranks_correct_highest() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
