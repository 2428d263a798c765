//! Game state types.

use crate::card::Card;

/// Which step of the round the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The table is empty and the attacker must open the round.
    Attack,
    /// An attack is undefended; the defender covers it or takes the pile.
    Defend,
    /// Every attack is covered; the attacker piles on or stops.
    PileOn,
    /// The game has ended.
    GameOver,
}

/// A move submitted on behalf of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attacker plays a card (opening attack or pile-on).
    Attack(Card),
    /// Defender covers the earliest undefended attack.
    Defend(Card),
    /// Defender picks up every card on the table.
    Take,
    /// Attacker stops piling on; the covered cards are discarded.
    Stop,
}
