//! Game and session statistics.

use alloc::vec;
use alloc::vec::Vec;

use crate::result::{GameOutcome, RoundOutcome, RoundResult};

/// Counters for a single game, kept by [`Game`](crate::Game).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Rounds resolved so far.
    pub rounds: u32,
    /// Attack cards played per seat.
    pub attacks: Vec<u32>,
    /// Defence cards played per seat.
    pub defences: Vec<u32>,
    /// Piles picked up per seat.
    pub piles_taken: Vec<u32>,
    /// Rounds whose cards were discarded after a full defence.
    pub piles_discarded: u32,
    /// Largest pile picked up in one round.
    pub biggest_pile: usize,
}

impl GameStats {
    /// Creates zeroed counters for `players` seats.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            rounds: 0,
            attacks: vec![0; players],
            defences: vec![0; players],
            piles_taken: vec![0; players],
            piles_discarded: 0,
            biggest_pile: 0,
        }
    }

    pub(crate) fn record_attack(&mut self, seat: usize) {
        self.attacks[seat] += 1;
    }

    pub(crate) fn record_defence(&mut self, seat: usize) {
        self.defences[seat] += 1;
    }

    pub(crate) fn record_round(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome {
            RoundOutcome::Defended => self.piles_discarded += 1,
            RoundOutcome::Taken => {
                self.piles_taken[result.defender] += 1;
                self.biggest_pile = self.biggest_pile.max(result.cards.len());
            }
        }
    }
}

/// Results across several games for one tracked seat.
///
/// The caller owns the tracker and feeds it each finished game; nothing is
/// shared between sessions.
///
/// # Example
///
/// ```
/// use durak::{GameOutcome, SessionStats};
///
/// let mut session = SessionStats::new();
/// session.record(GameOutcome::Fool(1), 0);
/// session.record(GameOutcome::Fool(0), 0);
/// assert_eq!(session.games_won, 1);
/// assert_eq!(session.loss_streak, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Games finished.
    pub games_played: u32,
    /// Games where the tracked seat was not the fool.
    pub games_won: u32,
    /// Games where the tracked seat was the fool.
    pub games_lost: u32,
    /// Games that ended with every hand empty.
    pub ties: u32,
    /// Consecutive wins.
    pub win_streak: u32,
    /// Consecutive losses.
    pub loss_streak: u32,
}

impl SessionStats {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            ties: 0,
            win_streak: 0,
            loss_streak: 0,
        }
    }

    /// Records a finished game from the point of view of `seat`.
    pub fn record(&mut self, outcome: GameOutcome, seat: usize) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Tie => {
                self.ties += 1;
                self.win_streak = 0;
                self.loss_streak = 0;
            }
            GameOutcome::Fool(fool) if fool == seat => {
                self.games_lost += 1;
                self.win_streak = 0;
                self.loss_streak += 1;
            }
            GameOutcome::Fool(_) => {
                self.games_won += 1;
                self.win_streak += 1;
                self.loss_streak = 0;
            }
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_tracks_streaks() {
        let mut session = SessionStats::new();
        session.record(GameOutcome::Fool(1), 0);
        session.record(GameOutcome::Fool(2), 0);
        assert_eq!(session.win_streak, 2);

        session.record(GameOutcome::Tie, 0);
        assert_eq!(session.ties, 1);
        assert_eq!(session.win_streak, 0);

        session.record(GameOutcome::Fool(0), 0);
        session.record(GameOutcome::Fool(0), 0);
        assert_eq!(session.loss_streak, 2);
        assert_eq!(session.games_played, 5);
        assert_eq!(session.games_won, 2);
        assert_eq!(session.games_lost, 2);

        session.reset();
        assert_eq!(session, SessionStats::default());
    }

    #[test]
    fn game_stats_count_rounds() {
        let mut stats = GameStats::new(2);
        let mut result = RoundResult {
            round: 1,
            attacker: 0,
            defender: 1,
            outcome: RoundOutcome::Taken,
            cards: vec![crate::Card::new(crate::Suit::Clubs, crate::Rank::Six); 3],
            drawn: vec![1, 0],
            next_attacker: 0,
            next_defender: 1,
            game_over: None,
        };
        stats.record_round(&result);
        result.outcome = RoundOutcome::Defended;
        stats.record_round(&result);

        assert_eq!(stats.rounds, 2);
        assert_eq!(stats.piles_taken, vec![0, 1]);
        assert_eq!(stats.piles_discarded, 1);
        assert_eq!(stats.biggest_pile, 3);
    }
}
