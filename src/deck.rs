//! The shuffled stock and its trump card.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Seed used by [`Deck::new_shuffled`] when no seed is given and no entropy
/// source is available.
pub const DEFAULT_SEED: u64 = 0x00D0_12A6;

/// The stock of undealt cards.
///
/// The front of the deck is the next card drawn. The last card is the
/// face-up trump card that fixes the trump suit for the whole game.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    trump: Suit,
    trump_card: Card,
    seed: Option<u64>,
}

impl Deck {
    /// Creates a shuffled deck.
    ///
    /// Without a seed one is drawn from the thread RNG (or [`DEFAULT_SEED`]
    /// without `std`). The seed actually used is available from [`Deck::seed`].
    #[must_use]
    pub fn new_shuffled(seed: Option<u64>) -> Self {
        Self::shuffled(seed.unwrap_or_else(fresh_seed))
    }

    /// Creates a deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::Deck;
    ///
    /// let a = Deck::shuffled(7);
    /// let b = Deck::shuffled(7);
    /// assert_eq!(a.cards().collect::<Vec<_>>(), b.cards().collect::<Vec<_>>());
    /// assert_eq!(a.trump(), b.trump());
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = full_set();
        cards.shuffle(&mut rng);

        let trump_card = cards[cards.len() - 1];
        tracing::debug!(seed, trump = %trump_card, "shuffled deck");

        Self {
            cards: cards.into(),
            trump: trump_card.suit,
            trump_card,
            seed: Some(seed),
        }
    }

    /// Creates a deck from cards in draw order (first element drawn first).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are given, since the trump
    /// suit comes from the last card, and [`DeckError::DuplicateCard`] if a
    /// card appears twice.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, DeckError> {
        let cards: VecDeque<Card> = cards.into_iter().collect();
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(&duplicate) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(DeckError::DuplicateCard(duplicate));
        }
        let trump_card = *cards.back().ok_or(DeckError::Empty)?;

        Ok(Self {
            cards,
            trump: trump_card.suit,
            trump_card,
            seed: None,
        })
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] once the stock is exhausted.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// The number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stock is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The trump suit, fixed at construction.
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.trump
    }

    /// The card that revealed the trump suit, even after it has been drawn.
    #[must_use]
    pub const fn trump_card(&self) -> Card {
        self.trump_card
    }

    /// The bottom card of the stock, if any remain.
    #[must_use]
    pub fn peek_bottom(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The seed the deck was shuffled with, or `None` for a stacked deck.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Iterates over the remaining cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

fn full_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

#[cfg(feature = "std")]
fn fresh_seed() -> u64 {
    use rand::Rng;
    rand::rng().random()
}

#[cfg(not(feature = "std"))]
const fn fresh_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_deck_has_every_card_once() {
        let deck = Deck::shuffled(3);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut cards: Vec<Card> = deck.cards().collect();
        for card in full_set() {
            let pos = cards.iter().position(|&c| c == card).unwrap();
            cards.swap_remove(pos);
        }
        assert!(cards.is_empty());
    }

    #[test]
    fn trump_comes_from_bottom_card() {
        let deck = Deck::shuffled(11);
        assert_eq!(deck.peek_bottom(), Some(deck.trump_card()));
        assert_eq!(deck.trump(), deck.trump_card().suit);
    }

    #[test]
    fn draw_takes_from_front_until_empty() {
        let a = Card::new(Suit::Clubs, Rank::Six);
        let b = Card::new(Suit::Hearts, Rank::Ace);
        let mut deck = Deck::from_cards([a, b]).unwrap();
        assert_eq!(deck.trump(), Suit::Hearts);

        assert_eq!(deck.draw(), Ok(a));
        assert_eq!(deck.draw(), Ok(b));
        assert_eq!(deck.draw(), Err(DeckError::Empty));
        assert_eq!(deck.peek_bottom(), None);
        assert_eq!(deck.trump(), Suit::Hearts);
        assert_eq!(deck.trump_card(), b);
    }

    #[test]
    fn empty_stacked_deck_is_rejected() {
        assert_eq!(Deck::from_cards(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn stacked_deck_rejects_repeated_cards() {
        let six = Card::new(Suit::Clubs, Rank::Six);
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(
            Deck::from_cards([six, ace, six]).unwrap_err(),
            DeckError::DuplicateCard(six)
        );
        assert!(Deck::from_cards([six, ace]).is_ok());
    }

    #[test]
    fn seed_is_recorded() {
        assert_eq!(Deck::new_shuffled(Some(5)).seed(), Some(5));
        assert!(Deck::new_shuffled(None).seed().is_some());
    }
}
