//! Property-based tests for the card rules and the round engine.

mod common;

use proptest::prelude::*;

use durak::{
    Card, DECK_SIZE, Deck, Game, GameOptions, GameState, MoveValidator, Rank, Suit, Table,
};

fn any_suit() -> impl Strategy<Value = Suit> {
    (0..Suit::ALL.len()).prop_map(|i| Suit::ALL[i])
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), 0..Rank::ALL.len()).prop_map(|(suit, r)| Card::new(suit, Rank::ALL[r]))
}

fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// `can_beat` matches the closed-form beat relation.
    #[test]
    fn prop_beat_relation(a in any_card(), b in any_card(), trump in any_suit()) {
        let expected = (a.suit == b.suit && a.rank_value() > b.rank_value())
            || (a.suit == trump && b.suit != trump);
        prop_assert_eq!(a.can_beat(&b, trump), expected);

        if a.suit == b.suit && a.rank_value() <= b.rank_value() {
            prop_assert!(!a.can_beat(&b, trump));
        }
    }

    /// Every seed yields each card exactly once.
    #[test]
    fn prop_deck_is_a_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled(seed);
        let mut seen: Vec<Card> = deck.cards().collect();
        prop_assert_eq!(seen.len(), DECK_SIZE);

        seen.sort_by_key(|c| (c.suit.index(), c.rank_value()));
        seen.dedup();
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    /// Equal seeds give equal draw sequences and trumps.
    #[test]
    fn prop_deck_is_deterministic(seed in any::<u64>()) {
        let mut a = Deck::new_shuffled(Some(seed));
        let mut b = Deck::new_shuffled(Some(seed));
        prop_assert_eq!(a.trump(), b.trump());
        while let Ok(card) = a.draw() {
            prop_assert_eq!(Ok(card), b.draw());
        }
        prop_assert!(b.is_empty());
    }

    /// Pile-on attacks are exactly the hand cards whose rank is on the table.
    #[test]
    fn prop_pile_on_matches_table_ranks(
        hand in any_hand(),
        played in prop::collection::vec(any_card(), 1..6),
        trump in any_suit(),
    ) {
        let mut table = Table::new();
        for card in &played {
            table.add_attack(*card);
        }
        let validator = MoveValidator::new(trump);
        let valid = validator.valid_attacks(&hand, &table);

        for card in &hand {
            let on_table = played.iter().any(|p| p.rank == card.rank);
            prop_assert_eq!(valid.contains(card), on_table);
            prop_assert_eq!(validator.can_attack(card, &table), on_table);
        }
    }

    /// Valid defences are exactly the hand cards that pass `can_defend`.
    #[test]
    fn prop_valid_defences_match_predicate(
        hand in any_hand(),
        attack in any_card(),
        trump in any_suit(),
    ) {
        let validator = MoveValidator::new(trump);
        let valid = validator.valid_defences(&hand, &attack);
        let expected: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| validator.can_defend(c, &attack))
            .collect();
        prop_assert_eq!(valid, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// AI self-play keeps every card accounted for and respects the round
    /// caps. Two-player games always finish.
    #[test]
    fn prop_self_play_invariants(seed in any::<u64>(), players in 2u8..=6) {
        common::init_logging();
        let options = GameOptions::default().with_players(players).with_seed(seed);
        let mut game = Game::new(options).unwrap();

        for _ in 0..5_000 {
            if game.is_over() {
                break;
            }
            let attacker = game.attacker();
            let defender = game.defender();
            prop_assert_ne!(attacker, defender);
            if game.state() == GameState::Attack {
                prop_assert!(game.player(attacker).card_count() > 0);
            }

            game.play_ai_turn().unwrap();

            prop_assert_eq!(game.cards_in_play(), DECK_SIZE);
            prop_assert!(game.table().len() <= game.options().max_attacks);
            if !game.is_over() {
                let defender_cards = game.player(game.defender()).card_count();
                prop_assert!(game.table().undefended_count() <= defender_cards);
            }
        }

        if players == 2 {
            prop_assert!(game.is_over());
        }
    }
}
