//! The battlefield: attack and defence pairs of the current round.

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, Rank};
use crate::error::TableError;

/// An attack card and the card covering it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattlePair {
    /// The attacking card.
    pub attack: Card,
    /// The defending card, once played.
    pub defence: Option<Card>,
}

impl BattlePair {
    /// Returns whether the attack has been covered.
    #[must_use]
    pub const fn is_defended(&self) -> bool {
        self.defence.is_some()
    }
}

/// Cards in play this round, in the order attacks were declared.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pairs: Vec<BattlePair>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Places a new, undefended attack.
    pub fn add_attack(&mut self, card: Card) {
        self.pairs.push(BattlePair {
            attack: card,
            defence: None,
        });
    }

    /// Covers the attack at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no attack at `index` or it is already
    /// defended.
    pub fn add_defence(&mut self, index: usize, card: Card) -> Result<(), TableError> {
        let pair = self
            .pairs
            .get_mut(index)
            .ok_or(TableError::IndexOutOfRange(index))?;
        if pair.is_defended() {
            return Err(TableError::AlreadyDefended(index));
        }
        pair.defence = Some(card);
        Ok(())
    }

    /// Index of the earliest undefended attack.
    #[must_use]
    pub fn first_undefended_index(&self) -> Option<usize> {
        self.pairs.iter().position(|p| !p.is_defended())
    }

    /// Returns whether every attack is covered (true for an empty table).
    #[must_use]
    pub fn all_defended(&self) -> bool {
        self.first_undefended_index().is_none()
    }

    /// Number of attacks still waiting for a defence.
    #[must_use]
    pub fn undefended_count(&self) -> usize {
        self.pairs.iter().filter(|p| !p.is_defended()).count()
    }

    /// Ranks of every attack and defence card on the table.
    #[must_use]
    pub fn ranks_on_table(&self) -> HashSet<Rank> {
        self.cards().map(|c| c.rank).collect()
    }

    /// All cards on the table, each attack followed by its defence.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.cards().collect()
    }

    /// The attack cards in declaration order.
    #[must_use]
    pub fn attacks(&self) -> Vec<Card> {
        self.pairs.iter().map(|p| p.attack).collect()
    }

    /// The defence cards played so far.
    #[must_use]
    pub fn defences(&self) -> Vec<Card> {
        self.pairs.iter().filter_map(|p| p.defence).collect()
    }

    /// The pairs in declaration order.
    #[must_use]
    pub fn pairs(&self) -> &[BattlePair] {
        &self.pairs
    }

    /// Number of attacks on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns whether no attack has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Empties the table.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Empties the table, returning its cards in placement order.
    pub fn drain(&mut self) -> Vec<Card> {
        let cards = self.all_cards();
        self.pairs.clear();
        cards
    }

    fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| core::iter::once(p.attack).chain(p.defence))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            match pair.defence {
                Some(defence) => write!(f, "{} / {defence}", pair.attack)?,
                None => write!(f, "{} / _", pair.attack)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use alloc::string::ToString;
    use alloc::vec;

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn defence_slots_are_set_once() {
        let mut table = Table::new();
        table.add_attack(card(Suit::Clubs, Rank::Six));

        assert_eq!(
            table.add_defence(1, card(Suit::Clubs, Rank::Nine)),
            Err(TableError::IndexOutOfRange(1))
        );
        table.add_defence(0, card(Suit::Clubs, Rank::Nine)).unwrap();
        assert_eq!(
            table.add_defence(0, card(Suit::Clubs, Rank::Ten)),
            Err(TableError::AlreadyDefended(0))
        );
    }

    #[test]
    fn tracks_undefended_attacks() {
        let mut table = Table::new();
        assert!(table.all_defended());
        assert_eq!(table.first_undefended_index(), None);

        table.add_attack(card(Suit::Clubs, Rank::Six));
        table.add_attack(card(Suit::Hearts, Rank::Six));
        assert_eq!(table.first_undefended_index(), Some(0));
        assert_eq!(table.undefended_count(), 2);

        table.add_defence(0, card(Suit::Clubs, Rank::Jack)).unwrap();
        assert_eq!(table.first_undefended_index(), Some(1));
        assert!(!table.all_defended());

        table.add_defence(1, card(Suit::Hearts, Rank::Ace)).unwrap();
        assert!(table.all_defended());
        assert_eq!(table.undefended_count(), 0);
    }

    #[test]
    fn ranks_and_cards_cover_both_sides() {
        let mut table = Table::new();
        table.add_attack(card(Suit::Clubs, Rank::Six));
        table.add_defence(0, card(Suit::Clubs, Rank::Nine)).unwrap();
        table.add_attack(card(Suit::Spades, Rank::Nine));

        let ranks = table.ranks_on_table();
        assert_eq!(ranks.len(), 2);
        assert!(ranks.contains(&Rank::Six));
        assert!(ranks.contains(&Rank::Nine));

        assert_eq!(
            table.all_cards(),
            vec![
                card(Suit::Clubs, Rank::Six),
                card(Suit::Clubs, Rank::Nine),
                card(Suit::Spades, Rank::Nine),
            ]
        );
        assert_eq!(table.attacks().len(), 2);
        assert_eq!(table.defences(), vec![card(Suit::Clubs, Rank::Nine)]);
        assert_eq!(table.to_string(), "6♣ / 9♣ | 9♠ / _");

        assert_eq!(table.drain().len(), 3);
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "(empty)");
    }
}
