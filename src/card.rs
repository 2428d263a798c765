//! Card types and comparison rules.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Position of the suit in [`Suit::ALL`], used as a sort tie-break.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }

    /// The suit's card symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank, six through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 9] = [
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Strength of the rank, from 0 (six) to 8 (ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Six => 0,
            Self::Seven => 1,
            Self::Eight => 2,
            Self::Nine => 3,
            Self::Ten => 4,
            Self::Jack => 5,
            Self::Queen => 6,
            Self::King => 7,
            Self::Ace => 8,
        }
    }

    /// Short label used when printing a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Strength of the card's rank, from 0 (six) to 8 (ace).
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card belongs to the trump suit.
    #[must_use]
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Returns whether this card, played as a defence, beats `other`.
    ///
    /// A card beats another of the same suit with a strictly lower rank, and
    /// any trump beats any non-trump.
    #[must_use]
    pub fn can_beat(&self, other: &Self, trump: Suit) -> bool {
        if self.suit == other.suit {
            return self.rank_value() > other.rank_value();
        }
        self.is_trump(trump) && !other.is_trump(trump)
    }

    /// Sort key placing non-trumps before trumps, each ordered by rank, with
    /// the suit as the final tie-break.
    #[must_use]
    pub fn sort_key(&self, trump: Suit) -> (bool, u8, u8) {
        (self.is_trump(trump), self.rank_value(), self.suit.index())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards in a deck: nine ranks in each of four suits.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
