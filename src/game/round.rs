use alloc::vec;
use alloc::vec::Vec;

use crate::result::{GameOutcome, RoundOutcome, RoundResult};

use super::Game;

impl Game {
    /// Ends the round: clears the table, draws up, checks for the end of the
    /// game and rotates roles.
    pub(super) fn resolve_round(&mut self, outcome: RoundOutcome) -> RoundResult {
        let attacker = self.attacker;
        let defender = self.defender;
        let trump = self.trump();

        let cards = self.table.drain();
        match outcome {
            RoundOutcome::Taken => {
                let taker = &mut self.players[defender];
                taker.take_cards(cards.iter().copied());
                taker.sort_hand(trump);
            }
            RoundOutcome::Defended => self.discard.extend_from_slice(&cards),
        }

        let drawn = self.draw_up();
        self.round += 1;

        let game_over = self.check_game_over();
        if game_over.is_none() {
            self.advance_roles(outcome == RoundOutcome::Taken);
        }
        self.outcome = game_over;

        let result = RoundResult {
            round: self.round,
            attacker,
            defender,
            outcome,
            cards,
            drawn,
            next_attacker: self.attacker,
            next_defender: self.defender,
            game_over,
        };
        self.stats.record_round(&result);

        tracing::info!(
            round = result.round,
            attacker,
            defender,
            ?outcome,
            cards = result.cards.len(),
            deck = self.deck.remaining(),
            "round resolved"
        );
        if let Some(end) = game_over {
            tracing::info!(?end, rounds = self.round, "game over");
        }

        result
    }

    /// Seats in draw-up order: attacker first, then the other seats in table
    /// order, defender last.
    #[must_use]
    pub fn draw_up_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.players.len());
        order.push(self.attacker);
        order.extend(
            (0..self.players.len()).filter(|&s| s != self.attacker && s != self.defender),
        );
        order.push(self.defender);
        order
    }

    /// Refills every hand to the target size while the deck lasts.
    fn draw_up(&mut self) -> Vec<usize> {
        let trump = self.trump();
        let target = self.options.hand_size;
        let mut drawn = vec![0; self.players.len()];

        for seat in self.draw_up_order() {
            let player = &mut self.players[seat];
            drawn[seat] = player.draw_up_to(&mut self.deck, target);
            if drawn[seat] > 0 {
                player.sort_hand(trump);
                tracing::debug!(
                    seat,
                    drawn = drawn[seat],
                    deck = self.deck.remaining(),
                    "draw-up"
                );
            }
        }
        drawn
    }

    /// The fool once a single hand holds cards, a tie once none do.
    fn check_game_over(&self) -> Option<GameOutcome> {
        let mut active = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.card_count() > 0)
            .map(|(seat, _)| seat);

        match (active.next(), active.next()) {
            (None, _) => Some(GameOutcome::Tie),
            (Some(fool), None) => Some(GameOutcome::Fool(fool)),
            _ => None,
        }
    }

    /// First seat from `start` onward, wrapping around, that still holds cards.
    fn next_active_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&seat| self.players[seat].card_count() > 0)
    }

    /// After a pick-up the seat after the defender attacks; after a held
    /// defence the defender attacks. Seats with empty hands are skipped.
    fn advance_roles(&mut self, defender_took: bool) {
        let start = if defender_took {
            self.defender + 1
        } else {
            self.defender
        };
        // check_game_over guarantees at least two seats hold cards.
        if let Some(attacker) = self.next_active_from(start) {
            if let Some(defender) = self.next_active_from(attacker + 1) {
                self.attacker = attacker;
                self.defender = defender;
            }
        }
    }
}
