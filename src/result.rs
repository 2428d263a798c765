//! Round and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every attack was covered and the cards were discarded.
    Defended,
    /// The defender picked up the table.
    Taken,
}

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The only player left holding cards.
    Fool(usize),
    /// Every hand emptied in the same round.
    Tie,
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Seat that attacked.
    pub attacker: usize,
    /// Seat that defended.
    pub defender: usize,
    /// Whether the defence held.
    pub outcome: RoundOutcome,
    /// Cards discarded or picked up, in placement order.
    pub cards: Vec<Card>,
    /// Cards drawn per seat during draw-up.
    pub drawn: Vec<usize>,
    /// Attacker for the next round.
    pub next_attacker: usize,
    /// Defender for the next round.
    pub next_defender: usize,
    /// Set when this round ended the game.
    pub game_over: Option<GameOutcome>,
}

impl RoundResult {
    /// Returns whether the defender picked up the table.
    #[must_use]
    pub fn defender_took(&self) -> bool {
        self.outcome == RoundOutcome::Taken
    }
}
