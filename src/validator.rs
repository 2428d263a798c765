//! Move legality checks.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::MoveError;
use crate::table::Table;

/// Answers whether attacks and defences are legal under a trump suit.
///
/// The validator is stateless apart from the trump. Round caps (attack limit,
/// defender hand size) are enforced by [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveValidator {
    trump: Suit,
}

impl MoveValidator {
    /// Creates a validator for the given trump suit.
    #[must_use]
    pub const fn new(trump: Suit) -> Self {
        Self { trump }
    }

    /// The trump suit.
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.trump
    }

    /// Any card may open a round.
    #[must_use]
    pub const fn can_attack_first(&self, _card: &Card) -> bool {
        true
    }

    /// Returns whether `card` may be added to the table.
    #[must_use]
    pub fn can_attack(&self, card: &Card, table: &Table) -> bool {
        self.check_attack(card, table).is_ok()
    }

    /// Checks an attack, reporting why it is illegal.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RankNotOnTable`] for a pile-on card whose rank is
    /// not among the cards already played this round.
    pub fn check_attack(&self, card: &Card, table: &Table) -> Result<(), MoveError> {
        if table.is_empty() || table.ranks_on_table().contains(&card.rank) {
            Ok(())
        } else {
            Err(MoveError::RankNotOnTable)
        }
    }

    /// Cards from `hand` that may be added to the table.
    #[must_use]
    pub fn valid_attacks(&self, hand: &[Card], table: &Table) -> Vec<Card> {
        if table.is_empty() {
            return hand.to_vec();
        }
        let ranks = table.ranks_on_table();
        hand.iter()
            .copied()
            .filter(|c| ranks.contains(&c.rank))
            .collect()
    }

    /// Returns whether `defence` beats `attack`.
    #[must_use]
    pub fn can_defend(&self, defence: &Card, attack: &Card) -> bool {
        defence.can_beat(attack, self.trump)
    }

    /// Checks a defence, reporting why it is illegal.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DoesNotBeat`] if `defence` does not beat `attack`.
    pub fn check_defence(&self, defence: &Card, attack: &Card) -> Result<(), MoveError> {
        if self.can_defend(defence, attack) {
            Ok(())
        } else {
            Err(MoveError::DoesNotBeat)
        }
    }

    /// Cards from `hand` that beat `attack`.
    #[must_use]
    pub fn valid_defences(&self, hand: &[Card], attack: &Card) -> Vec<Card> {
        hand.iter()
            .copied()
            .filter(|c| self.can_defend(c, attack))
            .collect()
    }
}
