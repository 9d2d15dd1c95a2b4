use tracing::debug;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::ActionError;
use crate::outcome::{Outcome, Reason};

use super::{Phase, Round};

impl<S: Shoe> Round<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately with
    /// [`Outcome::DealerWins`]`(`[`Reason::PlayerBust`]`)`; the dealer does not
    /// play.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn or the shoe is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            debug!(player = self.player.value(), "player bust");
            self.finish(Outcome::DealerWins(Reason::PlayerBust));
        }

        Ok(card)
    }

    /// Player action: Stand, then let the dealer play and settle the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn, the player is
    /// already bust, or the shoe runs out while the dealer must draw. In the
    /// last case the round stays in [`Phase::DealerTurn`] and only
    /// [`Round::restart`] makes it usable again.
    pub fn resolve(&mut self) -> Result<Outcome, ActionError> {
        self.ensure_player_turn()?;

        if self.player.is_bust() {
            return Err(ActionError::InvalidState);
        }

        self.phase = Phase::DealerTurn;
        self.hole_revealed = true;
        debug!(
            player = self.player.value(),
            dealer = self.dealer.value(),
            "player stands"
        );

        let drawn = self.dealer_play()?;
        debug!(drawn = drawn.len(), dealer = self.dealer.value(), "dealer turn over");

        let outcome = super::settle(
            self.player.value(),
            self.dealer.value(),
            self.rules.tie_policy,
        );
        self.finish(outcome);

        Ok(outcome)
    }
}
