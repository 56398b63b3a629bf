//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or the embedded defaults.

use super::WordList;
use super::embedded;
use crate::core::Word;
use crate::error::DataLoadError;
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Text compiled into the binary
    Embedded {
        name: &'static str,
        text: &'static str,
    },
    /// A plain-text file on disk
    File(PathBuf),
}

impl WordSource {
    /// The bundled valid-guess list
    #[must_use]
    pub const fn embedded_valid_words() -> Self {
        Self::Embedded {
            name: "valid words",
            text: embedded::VALID_WORDS,
        }
    }

    /// The bundled solution list
    #[must_use]
    pub const fn embedded_solutions() -> Self {
        Self::Embedded {
            name: "solutions",
            text: embedded::SOLUTIONS,
        }
    }

    /// Human-readable name used in errors and logs
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Embedded { name, .. } => Cow::Borrowed(*name),
            Self::File(path) => path.to_string_lossy(),
        }
    }

    /// Read the raw text of this source
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Unreadable` if a file cannot be read.
    pub fn read(&self) -> Result<Cow<'static, str>, DataLoadError> {
        match self {
            Self::Embedded { text, .. } => Ok(Cow::Borrowed(text)),
            Self::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| DataLoadError::Unreadable {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Parse newline-delimited text into words
///
/// Lines are trimmed and lower-cased; blank lines are skipped silently and
/// malformed lines are skipped with a warning.
///
/// # Examples
/// ```
/// use wordle_board::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("test", "Crane\n\n slate \nsl4te\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn words_from_lines(name: &str, text: &str) -> Vec<Word> {
    text.lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(list = name, line = line_no + 1, entry = trimmed, %err, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Parse one source into a [`WordList`]
///
/// # Errors
///
/// Returns `DataLoadError` if the source is unreadable, has no words, or mixes
/// word lengths.
pub fn load_list(source: &WordSource) -> Result<WordList, DataLoadError> {
    let name = source.name();
    let text = source.read()?;
    let list = WordList::new(name.as_ref(), words_from_lines(&name, &text))?;
    info!(
        list = %name,
        words = list.len(),
        word_len = list.word_len(),
        "loaded word list"
    );
    Ok(list)
}

/// Load the valid-guess list and the solution list
///
/// Both lists must share one word length. Solutions absent from the valid
/// list are logged; they can be chosen as secrets but never guessed.
///
/// # Errors
///
/// Returns `DataLoadError` if either list fails to load or the lengths differ.
///
/// # Examples
/// ```
/// use wordle_board::wordlists::loader::{WordSource, load_lists};
///
/// let (valid, solutions) = load_lists(
///     &WordSource::embedded_valid_words(),
///     &WordSource::embedded_solutions(),
/// )
/// .unwrap();
/// assert!(valid.len() >= solutions.len());
/// ```
pub fn load_lists(
    valid_source: &WordSource,
    solutions_source: &WordSource,
) -> Result<(WordList, WordList), DataLoadError> {
    let valid = load_list(valid_source)?;
    let solutions = load_list(solutions_source)?;

    if valid.word_len() != solutions.word_len() {
        return Err(DataLoadError::LengthMismatch {
            valid: valid.word_len(),
            solutions: solutions.word_len(),
        });
    }

    let unguessable = solutions
        .iter()
        .filter(|word| !valid.contains(word.text()))
        .count();
    if unguessable > 0 {
        warn!(count = unguessable, "solutions missing from the valid-guess list");
    }

    Ok((valid, solutions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn data_file(name: &str) -> WordSource {
        WordSource::File(Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name))
    }

    fn text_source(text: &'static str) -> WordSource {
        WordSource::Embedded { name: "test", text }
    }

    #[test]
    fn words_from_lines_normalizes() {
        let words = words_from_lines("test", "  CRANE\r\nSlate\n\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines("test", "crane\nsl@te\nab cd\nirate");
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate"]);
    }

    #[test]
    fn load_list_from_file() {
        let list = load_list(&data_file("solutions.txt")).unwrap();
        assert_eq!(list.word_len(), 5);
        assert!(list.contains("apple"));
    }

    #[test]
    fn load_list_missing_file() {
        let err = load_list(&data_file("does_not_exist.txt")).unwrap_err();
        assert!(matches!(err, DataLoadError::Unreadable { .. }));
    }

    #[test]
    fn load_list_empty_source() {
        let err = load_list(&text_source("\n  \n\n")).unwrap_err();
        assert!(matches!(err, DataLoadError::Empty { .. }));
    }

    #[test]
    fn load_list_only_invalid_entries_is_empty() {
        let err = load_list(&text_source("12345\n!!!!!\n")).unwrap_err();
        assert!(matches!(err, DataLoadError::Empty { .. }));
    }

    #[test]
    fn load_list_mixed_lengths() {
        let err = load_list(&text_source("crane\nslates\n")).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MixedLengths { expected: 5, ref word, .. } if word == "slates"
        ));
    }

    #[test]
    fn load_lists_embedded() {
        let (valid, solutions) = load_lists(
            &WordSource::embedded_valid_words(),
            &WordSource::embedded_solutions(),
        )
        .unwrap();
        assert_eq!(valid.word_len(), 5);
        assert_eq!(solutions.word_len(), 5);
    }

    #[test]
    fn load_lists_length_mismatch() {
        let err = load_lists(&text_source("crane\nslate"), &text_source("cranes"))
            .unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::LengthMismatch {
                valid: 5,
                solutions: 6
            }
        ));
    }

    #[test]
    fn load_lists_missing_solutions_source() {
        let err = load_lists(
            &WordSource::embedded_valid_words(),
            &data_file("nope.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, DataLoadError::Unreadable { .. }));
    }

    #[test]
    fn source_names() {
        assert_eq!(WordSource::embedded_solutions().name(), "solutions");
        assert!(data_file("solutions.txt").name().ends_with("solutions.txt"));
    }
}
