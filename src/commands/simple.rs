//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{GameState, Input, Outcome, Session, Statistics};
use crate::output::formatters::{keyboard, row_tiles};
use crate::wordlists::WordLists;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng + ?Sized>(lists: &WordLists, rows: usize, rng: &mut R) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(lists, rows, rng, stdin.lock(), stdout.lock())
}

/// Run the line-based game loop over arbitrary reader and writer
///
/// Each line is a guess, or one of `quit`, `new`, `retry`. Ends at EOF or on
/// `quit`, returning the statistics of the games finished.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or the board
/// has no rows.
pub fn run_simple_with<R, I, O>(
    lists: &WordLists,
    rows: usize,
    rng: &mut R,
    input: I,
    mut out: O,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut session = Session::start(lists, rows, rng)?;
    let mut stats = Statistics::default();

    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        session.word_len(),
        session.max_rows()
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word, 'retry' to replay this word\n")?;
    prompt(&mut out, &session)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.new_word(rng);
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            "retry" | "r" => {
                session.try_again();
                writeln!(out, "\n🔄 Board cleared, same word.\n")?;
            }
            guess => play_line(&mut session, &mut stats, guess, &mut out)?,
        }

        prompt(&mut out, &session)?;
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn play_line<O: Write>(
    session: &mut Session<'_>,
    stats: &mut Statistics,
    guess: &str,
    out: &mut O,
) -> Result<()> {
    if session.state().is_over() {
        writeln!(out, "Game over. Type 'new' or 'retry'.")?;
        return Ok(());
    }
    if guess.chars().count() != session.word_len()
        || !guess.chars().all(|c| c.is_ascii_alphabetic())
    {
        writeln!(
            out,
            "{}",
            format!("❌ Enter a {}-letter word", session.word_len()).red()
        )?;
        return Ok(());
    }

    // Leftovers from a rejected guess stay in the row until erased
    while session.handle(Input::Backspace)? == Outcome::LetterRemoved {}
    for ch in guess.chars() {
        session.handle(Input::Letter(ch))?;
    }

    match session.handle(Input::Submit)? {
        Outcome::Rejected(word) => {
            writeln!(
                out,
                "{}",
                format!("❌ '{}' is not in the word list", word.text().to_uppercase()).red()
            )?;
        }
        Outcome::Scored(_) => {
            print_board(session, out)?;
            match session.state() {
                GameState::Won => {
                    stats.record(session);
                    writeln!(
                        out,
                        "\n{}",
                        format!("🎉 Solved in {}!", session.guesses_used()).green().bold()
                    )?;
                    writeln!(out, "Type 'new' for another word or 'quit'.")?;
                }
                GameState::Lost => {
                    stats.record(session);
                    writeln!(
                        out,
                        "\n{}",
                        format!("The word was {}", session.secret().text().to_uppercase())
                            .red()
                            .bold()
                    )?;
                    writeln!(out, "Type 'new' for another word, 'retry' to replay, or 'quit'.")?;
                }
                GameState::AwaitingInput | GameState::RowSubmitted => {}
            }
        }
        Outcome::LetterAdded(_) | Outcome::LetterRemoved | Outcome::Ignored => {}
    }
    Ok(())
}

fn print_board<O: Write>(session: &Session<'_>, out: &mut O) -> Result<()> {
    writeln!(out)?;
    for row in session.submitted_rows() {
        writeln!(out, "  {}", row_tiles(row, session.word_len()))?;
    }
    writeln!(out)?;
    for line in keyboard(&session.letter_hints()) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn prompt<O: Write>(out: &mut O, session: &Session<'_>) -> Result<()> {
    if !session.state().is_over() {
        write!(out, "Guess {}/{}: ", session.guesses_used() + 1, session.max_rows())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists() -> WordLists {
        let words = |ws: &[&str]| {
            WordList::new("test", ws.iter().map(|w| Word::new(w).unwrap())).unwrap()
        };
        WordLists::from_lists(
            words(&["apple", "angle", "crane", "slate"]),
            words(&["apple"]),
        )
        .unwrap()
    }

    fn play(script: &str, rows: usize) -> (Statistics, String) {
        colored::control::set_override(false);
        let lists = lists();
        let mut rng = StdRng::seed_from_u64(5);
        let mut out = Vec::new();
        let stats = run_simple_with(&lists, rows, &mut rng, script.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_is_recorded() {
        let (stats, out) = play("angle\napple\nquit\n", 6);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(out.contains("Solved in 2"));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let (stats, out) = play("zzzzz\napple\n", 6);
        assert!(out.contains("'ZZZZZ' is not in the word list"));
        // The rejected letters are cleared before the next guess
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let (stats, out) = play("app\n", 6);
        assert!(out.contains("Enter a 5-letter word"));
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn loss_reveals_secret() {
        let (stats, out) = play("crane\nslate\n", 2);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(out.contains("The word was APPLE"));
    }

    #[test]
    fn retry_after_loss_allows_win() {
        let (stats, _) = play("crane\nretry\napple\n", 1);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
    }
}
