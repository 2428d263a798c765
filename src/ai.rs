//! Heuristic computer opponent.
//!
//! The heuristics only see the same hands, table and validator the rules
//! engine uses, so every card they pick is legal.

use crate::card::{Card, Suit};
use crate::game::{Action, Game, GameState};
use crate::table::Table;
use crate::validator::MoveValidator;

/// Picks the weakest legal attack: the lowest non-trump, else the lowest trump.
#[must_use]
pub fn choose_attack(hand: &[Card], table: &Table, trump: Suit) -> Option<Card> {
    let valid = MoveValidator::new(trump).valid_attacks(hand, table);

    let lowest_plain = valid
        .iter()
        .filter(|c| !c.is_trump(trump))
        .min_by_key(|c| c.sort_key(trump));
    lowest_plain
        .or_else(|| valid.iter().min_by_key(|c| c.sort_key(trump)))
        .copied()
}

/// Decides whether the attacker should stop piling on.
///
/// Stops when no card in hand matches a rank on the table, when the round
/// already holds `max_attacks` attacks, or when the defender holds no more
/// cards than there are undefended attacks.
#[must_use]
pub fn should_stop_attacking(
    hand: &[Card],
    table: &Table,
    defender_hand_len: usize,
    max_attacks: usize,
) -> bool {
    let ranks = table.ranks_on_table();
    if !hand.iter().any(|c| ranks.contains(&c.rank)) {
        return true;
    }
    if table.len() >= max_attacks {
        return true;
    }
    defender_hand_len <= table.undefended_count()
}

/// Picks the cheapest card that beats `attack`, preferring the attack's suit
/// over spending a trump.
#[must_use]
pub fn choose_defence(hand: &[Card], attack: &Card, trump: Suit) -> Option<Card> {
    let valid = MoveValidator::new(trump).valid_defences(hand, attack);

    let same_suit = valid
        .iter()
        .filter(|c| c.suit == attack.suit)
        .min_by_key(|c| c.rank_value());
    same_suit
        .or_else(|| valid.iter().min_by_key(|c| c.rank_value()))
        .copied()
}

/// Chooses the move for whichever seat has to act.
///
/// Returns `None` once the game is over.
#[must_use]
pub fn choose_action(game: &Game) -> Option<(usize, Action)> {
    let trump = game.trump();
    let table = game.table();
    let attacker = game.attacker();
    let defender = game.defender();
    let attacker_hand = game.player(attacker).hand().cards();
    let defender_hand = game.player(defender).hand().cards();

    let action = match game.state() {
        GameState::GameOver => return None,
        GameState::Attack => {
            // An active attacker always holds a card.
            choose_attack(attacker_hand, table, trump).map_or(Action::Stop, Action::Attack)
        }
        GameState::PileOn => {
            let stop = should_stop_attacking(
                attacker_hand,
                table,
                defender_hand.len(),
                game.options().max_attacks,
            );
            match choose_attack(attacker_hand, table, trump) {
                Some(card) if !stop => Action::Attack(card),
                _ => Action::Stop,
            }
        }
        GameState::Defend => {
            let attack = table
                .first_undefended_index()
                .map(|i| table.pairs()[i].attack);
            match attack.and_then(|a| choose_defence(defender_hand, &a, trump)) {
                Some(card) => Action::Defend(card),
                None => Action::Take,
            }
        }
    };

    let seat = match action {
        Action::Defend(_) | Action::Take => defender,
        Action::Attack(_) | Action::Stop => attacker,
    };
    Some((seat, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn attack_prefers_lowest_non_trump() {
        let hand = [
            card(Suit::Hearts, Rank::Six),
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Spades, Rank::Eight),
        ];
        assert_eq!(
            choose_attack(&hand, &Table::new(), Suit::Hearts),
            Some(card(Suit::Spades, Rank::Eight))
        );
    }

    #[test]
    fn attack_falls_back_to_lowest_trump() {
        let hand = [card(Suit::Hearts, Rank::King), card(Suit::Hearts, Rank::Seven)];
        assert_eq!(
            choose_attack(&hand, &Table::new(), Suit::Hearts),
            Some(card(Suit::Hearts, Rank::Seven))
        );
    }

    #[test]
    fn attack_respects_table_ranks() {
        let mut table = Table::new();
        table.add_attack(card(Suit::Clubs, Rank::Nine));
        let hand = [card(Suit::Spades, Rank::Six), card(Suit::Diamonds, Rank::Ten)];
        assert_eq!(choose_attack(&hand, &table, Suit::Hearts), None);
    }

    #[test]
    fn stop_attacking_rules() {
        let mut table = Table::new();
        table.add_attack(card(Suit::Clubs, Rank::Nine));
        table.add_defence(0, card(Suit::Clubs, Rank::Ten)).unwrap();

        let matching = [card(Suit::Spades, Rank::Nine)];
        let unrelated = [card(Suit::Spades, Rank::Six)];

        assert!(!should_stop_attacking(&matching, &table, 3, 6));
        assert!(should_stop_attacking(&unrelated, &table, 3, 6));
        assert!(should_stop_attacking(&matching, &table, 3, 1));
        assert!(should_stop_attacking(&matching, &table, 0, 6));

        table.add_attack(card(Suit::Diamonds, Rank::Nine));
        assert!(should_stop_attacking(&matching, &table, 1, 6));
        assert!(!should_stop_attacking(&matching, &table, 2, 6));
    }

    #[test]
    fn defence_prefers_same_suit_minimum() {
        let hand = [
            card(Suit::Hearts, Rank::Six),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Clubs, Rank::Seven),
        ];
        let attack = card(Suit::Clubs, Rank::Ten);
        assert_eq!(
            choose_defence(&hand, &attack, Suit::Hearts),
            Some(card(Suit::Clubs, Rank::Queen))
        );
    }

    #[test]
    fn defence_spends_lowest_trump_when_needed() {
        let hand = [
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Ace),
        ];
        let attack = card(Suit::Clubs, Rank::Ten);
        assert_eq!(
            choose_defence(&hand, &attack, Suit::Hearts),
            Some(card(Suit::Hearts, Rank::Eight))
        );
        assert_eq!(choose_defence(&hand[2..], &attack, Suit::Hearts), None);
    }
}
