//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::hand::Player;
use crate::options::GameOptions;
use crate::result::GameOutcome;
use crate::stats::GameStats;
use crate::table::Table;
use crate::validator::MoveValidator;

mod actions;
mod round;
pub mod state;

pub use state::{Action, GameState};

/// Cards handed to each player per pass of the initial deal.
const DEAL_BATCH: usize = 2;

/// A Durak game engine that owns the stock, the seats and the table.
///
/// Every move is a discrete transition on `&mut self`. Illegal moves are
/// rejected with a [`MoveError`](crate::MoveError) and leave the game
/// unchanged. Use [`GameOptions`] to configure the number of players, hand
/// size, attack cap and shuffle seed.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Undealt cards.
    deck: Deck,
    /// Seats in table order.
    players: Vec<Player>,
    /// Cards in play this round.
    table: Table,
    /// Cards removed from play after successful defences.
    discard: Vec<Card>,
    /// Seat attacking this round.
    attacker: usize,
    /// Seat defending this round.
    defender: usize,
    /// Rounds resolved so far.
    round: u32,
    /// Set once the game has ended.
    outcome: Option<GameOutcome>,
    /// Per-game counters.
    stats: GameStats,
}

impl Game {
    /// Creates a game with a freshly shuffled deck and deals the hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_seed(42)).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.deck().remaining(), 24);
    /// ```
    pub fn new(options: GameOptions) -> Result<Self, SetupError> {
        let deck = Deck::new_shuffled(options.seed);
        Self::with_deck(options, deck)
    }

    /// Creates a game from a prepared deck and deals the hands.
    ///
    /// Cards are dealt two at a time in seat order until every hand is full.
    /// Seat 0 attacks seat 1 in the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the deck cannot fill
    /// every hand.
    pub fn with_deck(options: GameOptions, mut deck: Deck) -> Result<Self, SetupError> {
        options.validate()?;

        let seats = usize::from(options.players);
        let needed = seats * options.hand_size;
        if deck.remaining() < needed {
            return Err(SetupError::NotEnoughCards {
                needed,
                available: deck.remaining(),
            });
        }

        let mut players: Vec<Player> = (0..seats)
            .map(|seat| Player::new(format!("Player {}", seat + 1)))
            .collect();

        for _ in 0..options.hand_size.div_ceil(DEAL_BATCH) {
            for player in &mut players {
                let target = (player.card_count() + DEAL_BATCH).min(options.hand_size);
                player.draw_up_to(&mut deck, target);
            }
        }
        let trump = deck.trump();
        for player in &mut players {
            player.sort_hand(trump);
        }

        tracing::info!(
            players = seats,
            trump = %deck.trump_card(),
            seed = ?deck.seed(),
            "game started"
        );

        Ok(Self {
            deck,
            players,
            table: Table::new(),
            discard: Vec::new(),
            attacker: 0,
            defender: 1,
            round: 0,
            outcome: None,
            stats: GameStats::new(seats),
            options,
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current step of the round.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.outcome.is_some() {
            GameState::GameOver
        } else if self.table.is_empty() {
            GameState::Attack
        } else if self.table.all_defended() {
            GameState::PileOn
        } else {
            GameState::Defend
        }
    }

    /// Returns the seat expected to act next, or `None` once the game is over.
    #[must_use]
    pub fn to_act(&self) -> Option<usize> {
        match self.state() {
            GameState::Attack | GameState::PileOn => Some(self.attacker),
            GameState::Defend => Some(self.defender),
            GameState::GameOver => None,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns how the game ended, if it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The attacking seat.
    #[must_use]
    pub const fn attacker(&self) -> usize {
        self.attacker
    }

    /// The defending seat.
    #[must_use]
    pub const fn defender(&self) -> usize {
        self.defender
    }

    /// Rounds resolved so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The trump suit.
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.deck.trump()
    }

    /// The face-up card that set the trump suit.
    #[must_use]
    pub const fn trump_card(&self) -> Card {
        self.deck.trump_card()
    }

    /// A validator for this game's trump suit.
    #[must_use]
    pub const fn validator(&self) -> MoveValidator {
        MoveValidator::new(self.deck.trump())
    }

    /// The stock.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The battlefield.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Cards discarded after successful defences.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// All seats in table order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is out of range.
    #[must_use]
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    /// Changes the display name of a seat. Unknown seats are ignored.
    pub fn rename(&mut self, seat: usize, name: impl Into<String>) {
        if let Some(player) = self.players.get_mut(seat) {
            player.set_name(name);
        }
    }

    /// Per-game counters.
    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Cards `seat` could legally attack with right now.
    ///
    /// Only the attacker has valid attacks; other seats get an empty list, as
    /// does the attacker once the round's attack cap is reached.
    #[must_use]
    pub fn valid_attacks(&self, seat: usize) -> Vec<Card> {
        if self.is_over() || seat != self.attacker || self.attack_cap_reached() {
            return Vec::new();
        }
        self.validator()
            .valid_attacks(self.players[seat].hand().cards(), &self.table)
    }

    /// Cards `seat` could cover the earliest undefended attack with.
    ///
    /// Only the defender has valid defences; other seats get an empty list.
    #[must_use]
    pub fn valid_defences(&self, seat: usize) -> Vec<Card> {
        if self.is_over() || seat != self.defender {
            return Vec::new();
        }
        match self.table.first_undefended_index() {
            Some(index) => self.validator().valid_defences(
                self.players[seat].hand().cards(),
                &self.table.pairs()[index].attack,
            ),
            None => Vec::new(),
        }
    }

    /// Whether the round already holds `max_attacks` attacks, or as many
    /// undefended attacks as the defender has cards.
    fn attack_cap_reached(&self) -> bool {
        self.table.len() >= self.options.max_attacks
            || self.table.undefended_count() >= self.players[self.defender].card_count()
    }

    /// Cards held, on the table, in the stock and discarded. Constant for the
    /// whole game.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let held: usize = self.players.iter().map(Player::card_count).sum();
        held + self.table.all_cards().len() + self.deck.remaining() + self.discard.len()
    }
}
