//! Word lists for the game
//!
//! Two immutable lists are loaded once and passed around by reference: the
//! large valid-guess list (membership only) and the smaller solution list
//! (membership plus random selection of the secret).

mod embedded;
pub mod loader;

pub use embedded::{SOLUTIONS, VALID_WORDS};
pub use loader::{WordSource, load_lists};

use crate::core::Word;
use crate::error::DataLoadError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// An immutable, non-empty set of equal-length words
///
/// Keeps first-seen order alongside the hash index so that random selection
/// with a seeded RNG is reproducible.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_len: usize,
}

impl WordList {
    /// Build a list, collapsing duplicates
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Empty` for an empty input and
    /// `DataLoadError::MixedLengths` if words differ in length.
    pub fn new(
        name: &str,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DataLoadError> {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();
        let mut word_len = None;

        for word in words {
            let expected = *word_len.get_or_insert(word.len());
            if word.len() != expected {
                return Err(DataLoadError::MixedLengths {
                    name: name.to_string(),
                    expected,
                    word: word.text().to_string(),
                });
            }
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        let word_len = word_len.ok_or_else(|| DataLoadError::Empty {
            name: name.to_string(),
        })?;

        Ok(Self {
            words: ordered,
            index,
            word_len,
        })
    }

    /// Case-normalized membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let normalized = word.trim().to_ascii_lowercase();
        self.index.contains(normalized.as_str())
    }

    /// Uniformly random word from the list
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Length shared by every word in the list
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a list cannot be built empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Words as a slice, in first-seen order
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

/// Whether `word` may be submitted as a guess
///
/// Only the valid-guess list gates submission; the solution list is never
/// consulted.
///
/// # Examples
/// ```
/// use wordle_board::wordlists::{WordLists, is_valid_guess};
///
/// let lists = WordLists::embedded().unwrap();
/// assert!(is_valid_guess("CRANE", lists.valid()));
/// assert!(!is_valid_guess("zzzzz", lists.valid()));
/// ```
#[must_use]
pub fn is_valid_guess(word: &str, valid_words: &WordList) -> bool {
    valid_words.contains(word)
}

/// Pick the secret for a new game, uniformly at random
pub fn pick_solution<'a, R: Rng + ?Sized>(solutions: &'a WordList, rng: &mut R) -> &'a Word {
    solutions.choose(rng)
}

/// The pair of lists a game runs against
#[derive(Debug, Clone)]
pub struct WordLists {
    valid: WordList,
    solutions: WordList,
}

impl WordLists {
    /// Load both lists from their sources
    ///
    /// # Errors
    ///
    /// See [`load_lists`].
    pub fn load(
        valid_source: &WordSource,
        solutions_source: &WordSource,
    ) -> Result<Self, DataLoadError> {
        let (valid, solutions) = load_lists(valid_source, solutions_source)?;
        Ok(Self { valid, solutions })
    }

    /// Load the lists bundled with the binary
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is broken.
    pub fn embedded() -> Result<Self, DataLoadError> {
        Self::load(
            &WordSource::embedded_valid_words(),
            &WordSource::embedded_solutions(),
        )
    }

    /// Assemble from lists built elsewhere
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::LengthMismatch` if the word lengths differ.
    pub fn from_lists(valid: WordList, solutions: WordList) -> Result<Self, DataLoadError> {
        if valid.word_len() != solutions.word_len() {
            return Err(DataLoadError::LengthMismatch {
                valid: valid.word_len(),
                solutions: solutions.word_len(),
            });
        }
        Ok(Self { valid, solutions })
    }

    #[must_use]
    pub const fn valid(&self) -> &WordList {
        &self.valid
    }

    #[must_use]
    pub const fn solutions(&self) -> &WordList {
        &self.solutions
    }

    /// Board width for games on these lists
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.solutions.word_len()
    }

    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        is_valid_guess(word, &self.valid)
    }

    pub fn pick_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        pick_solution(&self.solutions, rng)
    }

    /// Solutions that can never be guessed because the valid list lacks them
    #[must_use]
    pub fn unguessable_solutions(&self) -> Vec<&Word> {
        self.solutions
            .iter()
            .filter(|word| !self.valid.contains(word.text()))
            .collect()
    }
}
