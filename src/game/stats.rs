//! Running totals across sessions in one process

use super::{MAX_ATTEMPTS, Summary};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index = guesses needed for a win (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Fold a finished game into the totals
    pub fn record(&mut self, summary: &Summary) {
        self.total_games += 1;
        if summary.won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = self.guess_distribution.get_mut(summary.guesses()) {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn finished(won: bool, guesses: usize) -> Summary {
        let secret = Word::new("crane").unwrap();
        let miss = Feedback::resolve(&secret, &Word::new("alloy").unwrap());
        let mut attempts = vec![miss; guesses];
        if won {
            attempts[guesses - 1] = Feedback::resolve(&secret, &secret);
        }
        Summary {
            won,
            secret,
            attempts,
        }
    }

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_and_losses_update_streaks() {
        let mut stats = Statistics::default();
        stats.record(&finished(true, 3));
        stats.record(&finished(true, 4));
        stats.record(&finished(false, 6));
        stats.record(&finished(true, 3));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
