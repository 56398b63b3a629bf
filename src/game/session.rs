//! Session state and transitions

use super::{GameState, Input, Outcome, Row};
use crate::core::{LetterClassification, Word, evaluate};
use crate::error::{ConfigError, LengthMismatchError, SessionError};
use crate::wordlists::WordLists;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// One game: a secret, a board of rows and a cursor
///
/// The word lists are borrowed for the session's lifetime; nothing is global.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    lists: &'a WordLists,
    secret: Word,
    rows: Vec<Row>,
    row: usize,
    state: GameState,
    invalid_word: bool,
}

impl<'a> Session<'a> {
    /// Start a game with a random secret from the solution list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRows` if `rows` is 0.
    pub fn start<R: Rng + ?Sized>(
        lists: &'a WordLists,
        rows: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        let secret = lists.pick_solution(rng).clone();
        Ok(Self::build(lists, secret, rows))
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if `rows` is 0 or the secret length differs
    /// from the word lists.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Word;
    /// use wordle_board::game::{GameState, Input, Outcome, Session};
    /// use wordle_board::wordlists::WordLists;
    ///
    /// let lists = WordLists::embedded().unwrap();
    /// let mut session = Session::with_secret(&lists, Word::new("apple").unwrap(), 6).unwrap();
    /// for ch in "apple".chars() {
    ///     session.handle(Input::Letter(ch)).unwrap();
    /// }
    /// let outcome = session.handle(Input::Submit).unwrap();
    /// assert!(matches!(outcome, Outcome::Scored(ref fb) if fb.is_win()));
    /// assert_eq!(session.state(), GameState::Won);
    /// ```
    pub fn with_secret(
        lists: &'a WordLists,
        secret: Word,
        rows: usize,
    ) -> Result<Self, SessionError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows.into());
        }
        if secret.len() != lists.word_len() {
            return Err(LengthMismatchError {
                secret: secret.len(),
                guess: lists.word_len(),
            }
            .into());
        }
        Ok(Self::build(lists, secret, rows))
    }

    fn build(lists: &'a WordLists, secret: Word, rows: usize) -> Self {
        info!(rows, word_len = secret.len(), "new game");
        Self {
            lists,
            secret,
            rows: vec![Row::default(); rows],
            row: 0,
            state: GameState::AwaitingInput,
            invalid_word: false,
        }
    }

    /// Feed one input event
    ///
    /// Finished games ignore every input; use [`Self::try_again`] or
    /// [`Self::new_word`] to play on.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatchError` only if the board and secret disagree in
    /// length, which construction rules out.
    pub fn handle(&mut self, input: Input) -> Result<Outcome, LengthMismatchError> {
        if self.state.is_over() {
            return Ok(Outcome::Ignored);
        }
        match input {
            Input::Letter(ch) => Ok(self.type_letter(ch)),
            Input::Backspace => Ok(self.backspace()),
            Input::Submit => self.submit(),
        }
    }

    fn type_letter(&mut self, ch: char) -> Outcome {
        let width = self.word_len();
        let row = &mut self.rows[self.row];
        if !ch.is_ascii_alphabetic() || row.len() >= width {
            return Outcome::Ignored;
        }
        let ch = ch.to_ascii_lowercase();
        row.push(ch);
        self.state = GameState::AwaitingInput;
        Outcome::LetterAdded(ch)
    }

    fn backspace(&mut self) -> Outcome {
        if self.rows[self.row].pop().is_none() {
            return Outcome::Ignored;
        }
        self.invalid_word = false;
        self.state = GameState::AwaitingInput;
        Outcome::LetterRemoved
    }

    fn submit(&mut self) -> Result<Outcome, LengthMismatchError> {
        let row = &self.rows[self.row];
        if row.len() < self.word_len() {
            return Ok(Outcome::Ignored);
        }
        let Ok(guess) = Word::new(row.letters()) else {
            return Ok(Outcome::Ignored);
        };

        if !self.lists.is_valid_guess(guess.text()) {
            debug!(%guess, "rejected guess not in word list");
            self.invalid_word = true;
            return Ok(Outcome::Rejected(guess));
        }

        let feedback = evaluate(&self.secret, &guess)?;
        self.rows[self.row].score(feedback.clone());
        self.row += 1;

        self.state = if feedback.is_win() {
            GameState::Won
        } else if self.row >= self.rows.len() {
            GameState::Lost
        } else {
            GameState::RowSubmitted
        };
        info!(%guess, %feedback, row = self.row, state = ?self.state, "row submitted");

        Ok(Outcome::Scored(feedback))
    }

    /// Clear the board and replay the same secret
    pub fn try_again(&mut self) {
        for row in &mut self.rows {
            *row = Row::default();
        }
        self.row = 0;
        self.state = GameState::AwaitingInput;
        self.invalid_word = false;
        info!("board cleared");
    }

    /// Clear the board and draw a new secret
    pub fn new_word<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret = self.lists.pick_solution(rng).clone();
        self.try_again();
    }

    /// Best classification seen so far for every guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterClassification> {
        let mut hints: FxHashMap<u8, LetterClassification> = FxHashMap::default();
        for row in self.submitted_rows() {
            let Some(feedback) = row.feedback() else {
                continue;
            };
            for (&letter, &class) in row.letters().as_bytes().iter().zip(feedback.classes()) {
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(class))
                    .or_insert(class);
            }
        }
        hints
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows already scored, in order
    pub fn submitted_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows[..self.row].iter()
    }

    /// `(row, column)` of the next letter; row equals the row count once the board is full
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        let column = self.rows.get(self.row).map_or(0, Row::len);
        (self.row, column)
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_guess(&self) -> &str {
        self.rows.get(self.row).map_or("", Row::letters)
    }

    /// Set by a rejected submission, cleared by the next backspace
    #[must_use]
    pub const fn invalid_word(&self) -> bool {
        self.invalid_word
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.row
    }
}
