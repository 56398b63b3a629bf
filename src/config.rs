//! Game configuration
//!
//! Settings gathered from the command line and environment, validated once
//! before any list is loaded.

use crate::error::{ConfigError, DataLoadError};
use crate::wordlists::{WordLists, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Number of guesses per game on a standard board
pub const DEFAULT_ROWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Valid-guess list; bundled list when `None`
    pub valid_words: Option<PathBuf>,
    /// Solution list; bundled list when `None`
    pub solutions: Option<PathBuf>,
    pub rows: usize,
    /// Fixed RNG seed for reproducible secrets
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            valid_words: None,
            solutions: None,
            rows: DEFAULT_ROWS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRows` for a board without rows.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        Ok(())
    }

    #[must_use]
    pub fn valid_words_source(&self) -> WordSource {
        self.valid_words
            .clone()
            .map_or_else(WordSource::embedded_valid_words, WordSource::File)
    }

    #[must_use]
    pub fn solutions_source(&self) -> WordSource {
        self.solutions
            .clone()
            .map_or_else(WordSource::embedded_solutions, WordSource::File)
    }

    /// Load both word lists named by this configuration
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if either list cannot be loaded.
    pub fn load_word_lists(&self) -> Result<WordLists, DataLoadError> {
        WordLists::load(&self.valid_words_source(), &self.solutions_source())
    }

    /// RNG for secret selection: seeded when configured, OS-seeded otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
