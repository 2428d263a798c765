//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use durak::{Card, Deck, Game, GameOptions, Rank, Suit};
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Installs a test subscriber once. The level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a game whose deck yields `draws` in order. With two-card deal
/// passes, seat `s` of `n` receives draws `2s, 2s + 1` in the first pass.
pub fn stacked_game(players: u8, hand_size: usize, draws: &[Card]) -> Game {
    init_logging();
    let options = GameOptions::default()
        .with_players(players)
        .with_hand_size(hand_size);
    let deck = Deck::from_cards(draws.iter().copied()).unwrap();
    Game::with_deck(options, deck).unwrap()
}

/// Hands, table and stock size, for checking that a rejected move changed
/// nothing.
pub fn snapshot(game: &Game) -> (Vec<Vec<Card>>, Vec<Card>, usize, usize, usize) {
    (
        game.players()
            .iter()
            .map(|p| p.hand().cards().to_vec())
            .collect(),
        game.table().all_cards(),
        game.deck().remaining(),
        game.attacker(),
        game.defender(),
    )
}
