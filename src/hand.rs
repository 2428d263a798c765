//! Player hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::HandError;

/// Cards held by one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand, e.g. a pile taken from the table.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes one matching card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotHeld`] if the card is not in the hand.
    pub fn remove(&mut self, card: Card) -> Result<(), HandError> {
        let pos = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(HandError::CardNotHeld(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Orders the cards non-trumps first, then trumps, each from low to high.
    pub fn sort(&mut self, trump: Suit) {
        self.cards.sort_by_key(|c| c.sort_key(trump));
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of trumps in the hand.
    #[must_use]
    pub fn trump_count(&self, trump: Suit) -> usize {
        self.cards.iter().filter(|c| c.is_trump(trump)).count()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// A seat at the table: a display name and the hand it owns.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Target hand size for the standard game.
    pub const STANDARD_HAND_SIZE: usize = 6;

    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Draws until the hand holds six cards or the deck runs out.
    ///
    /// Returns the number of cards drawn.
    pub fn draw_to_six(&mut self, deck: &mut Deck) -> usize {
        self.draw_up_to(deck, Self::STANDARD_HAND_SIZE)
    }

    /// Draws until the hand holds `target` cards or the deck runs out.
    ///
    /// Returns the number of cards drawn.
    pub fn draw_up_to(&mut self, deck: &mut Deck, target: usize) -> usize {
        let mut drawn = 0;
        while self.hand.len() < target {
            let Ok(card) = deck.draw() else {
                break;
            };
            self.hand.add_card(card);
            drawn += 1;
        }
        drawn
    }

    /// Removes one matching card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotHeld`] if the card is not in the hand.
    pub fn remove_card(&mut self, card: Card) -> Result<(), HandError> {
        self.hand.remove(card)
    }

    /// Adds cards to the hand.
    pub fn take_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.add_cards(cards);
    }

    /// Sorts the hand for display.
    pub fn sort_hand(&mut self, trump: Suit) {
        self.hand.sort(trump);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.name, self.hand.len(), self.hand)
    }
}
