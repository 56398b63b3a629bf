//! Win/loss statistics across games

use super::{GameState, Session};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished session; unfinished sessions are ignored
    pub fn record(&mut self, session: &Session<'_>) {
        match session.state() {
            GameState::Won => self.record_win(session.guesses_used()),
            GameState::Lost => self.record_loss(),
            GameState::AwaitingInput | GameState::RowSubmitted => {}
        }
    }

    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if self.guess_distribution.len() <= guesses {
            self.guess_distribution.resize(guesses + 1, 0);
        }
        self.guess_distribution[guesses] += 1;
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(4);
        stats.record_loss();
        stats.record_win(3);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
