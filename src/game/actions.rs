use crate::ai;
use crate::card::Card;
use crate::error::MoveError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Action, Game};

impl Game {
    const fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    const fn ensure_attacker(&self, seat: usize) -> Result<(), MoveError> {
        if seat != self.attacker {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    const fn ensure_defender(&self, seat: usize) -> Result<(), MoveError> {
        if seat != self.defender {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    fn ensure_holds(&self, seat: usize, card: Card) -> Result<(), MoveError> {
        if !self.players[seat].hand().contains(&card) {
            return Err(MoveError::CardNotHeld(card));
        }
        Ok(())
    }

    /// Attacker plays `card`, either opening the round or piling on.
    ///
    /// A pile-on card must match a rank already on the table. The round holds
    /// at most `max_attacks` attacks, and never more undefended attacks than
    /// the defender has cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, `seat` is not the attacker, the
    /// card is not held, its rank is not on the table, or the attack limit is
    /// reached.
    #[expect(
        clippy::missing_panics_doc,
        reason = "card presence is checked before removal"
    )]
    pub fn attack(&mut self, seat: usize, card: Card) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        self.ensure_attacker(seat)?;
        self.ensure_holds(seat, card)?;
        self.validator().check_attack(&card, &self.table)?;

        if self.attack_cap_reached() {
            return Err(MoveError::AttackLimitReached);
        }

        self.players[seat]
            .remove_card(card)
            .expect("card presence was checked above");
        self.table.add_attack(card);
        self.stats.record_attack(seat);

        tracing::debug!(seat, card = %card, table = %self.table, "attack");
        Ok(())
    }

    /// Defender covers the earliest undefended attack with `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, `seat` is not the defender, there
    /// is nothing to defend, the card is not held, or it does not beat the
    /// attack.
    #[expect(
        clippy::missing_panics_doc,
        reason = "card presence and the target index are checked first"
    )]
    pub fn defend(&mut self, seat: usize, card: Card) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        self.ensure_defender(seat)?;
        let index = self
            .table
            .first_undefended_index()
            .ok_or(MoveError::NothingToDefend)?;
        self.ensure_holds(seat, card)?;

        let attack = self.table.pairs()[index].attack;
        self.validator().check_defence(&card, &attack)?;

        self.players[seat]
            .remove_card(card)
            .expect("card presence was checked above");
        self.table
            .add_defence(index, card)
            .expect("index is the earliest undefended attack");
        self.stats.record_defence(seat);

        tracing::debug!(seat, attack = %attack, card = %card, "defence");
        Ok(())
    }

    /// Defender picks up every card on the table, ending the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, `seat` is not the defender, or
    /// every attack is already covered.
    pub fn take_pile(&mut self, seat: usize) -> Result<RoundResult, MoveError> {
        self.ensure_in_progress()?;
        self.ensure_defender(seat)?;
        if self.table.all_defended() {
            return Err(MoveError::NothingToDefend);
        }

        Ok(self.resolve_round(RoundOutcome::Taken))
    }

    /// Attacker stops piling on; the covered cards are discarded and the
    /// round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, `seat` is not the attacker, no
    /// attack has been made yet, or an attack is still undefended.
    pub fn stop_attacking(&mut self, seat: usize) -> Result<RoundResult, MoveError> {
        self.ensure_in_progress()?;
        self.ensure_attacker(seat)?;
        if self.table.is_empty() {
            return Err(MoveError::MustAttack);
        }
        if !self.table.all_defended() {
            return Err(MoveError::NotYourTurn);
        }

        Ok(self.resolve_round(RoundOutcome::Defended))
    }

    /// Applies `action` on behalf of `seat`.
    ///
    /// Returns the round result when the action ended the round.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason of the underlying move.
    pub fn act(&mut self, seat: usize, action: Action) -> Result<Option<RoundResult>, MoveError> {
        let result = match action {
            Action::Attack(card) => self.attack(seat, card).map(|()| None),
            Action::Defend(card) => self.defend(seat, card).map(|()| None),
            Action::Take => self.take_pile(seat).map(Some),
            Action::Stop => self.stop_attacking(seat).map(Some),
        };
        result.inspect_err(|err| tracing::trace!(seat, ?action, %err, "move rejected"))
    }

    /// Lets the heuristic AI make the next move for whichever seat must act.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended.
    pub fn play_ai_turn(&mut self) -> Result<Option<RoundResult>, MoveError> {
        let (seat, action) = ai::choose_action(self).ok_or(MoveError::GameOver)?;
        self.act(seat, action)
    }
}
