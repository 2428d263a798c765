//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Rule violations. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The seat does not hold the role required for this move.
    #[error("not this player's turn")]
    NotYourTurn,
    /// A pile-on card must match a rank already on the table.
    #[error("rank is not on the table")]
    RankNotOnTable,
    /// The defence card does not beat the attack it covers.
    #[error("card does not beat the attack")]
    DoesNotBeat,
    /// The player does not hold the card.
    #[error("player does not hold {0}")]
    CardNotHeld(Card),
    /// The round's attack cap or the defender's hand size is reached.
    #[error("no more attacks allowed this round")]
    AttackLimitReached,
    /// Every attack on the table is already covered.
    #[error("nothing to defend")]
    NothingToDefend,
    /// The opening attack of a round cannot be passed.
    #[error("the opening attack cannot be passed")]
    MustAttack,
    /// The game has already ended.
    #[error("game over")]
    GameOver,
}

/// Errors from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("deck is empty")]
    Empty,
    /// A stacked deck lists the same card twice.
    #[error("deck holds {0} more than once")]
    DuplicateCard(Card),
}

/// Errors from the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No attack at this index.
    #[error("no attack at index {0}")]
    IndexOutOfRange(usize),
    /// The attack at this index is already covered.
    #[error("attack at index {0} is already defended")]
    AlreadyDefended(usize),
}

/// Errors from hand manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("hand does not hold {0}")]
    CardNotHeld(Card),
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players.
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(u8),
    /// More than six players.
    #[error("at most 6 players are allowed, got {0}")]
    TooManyPlayers(u8),
    /// Hands must hold at least one card.
    #[error("hand size must be at least 1")]
    ZeroHandSize,
    /// A round must allow at least one attack.
    #[error("attack cap must be at least 1")]
    ZeroMaxAttacks,
    /// The deck cannot fill every hand.
    #[error("deck has {available} cards, {needed} needed to deal")]
    NotEnoughCards {
        /// Cards required for the deal.
        needed: usize,
        /// Cards in the deck.
        available: usize,
    },
}
