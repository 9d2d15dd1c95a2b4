use alloc::vec::Vec;

use tracing::trace;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::ActionError;
use crate::hand::BUST_LIMIT;
use crate::options::TiePolicy;
use crate::outcome::{Outcome, Reason};

use super::{Phase, Round};

/// Settles a round the player stood on.
///
/// A dealer bust wins for the player, otherwise the higher value wins and
/// equal values follow `tie_policy`. The player is assumed not bust; that path
/// ends the round before the dealer plays.
///
/// # Example
///
/// ```
/// use bjcore::{Outcome, Reason, TiePolicy, settle};
///
/// assert_eq!(
///     settle(20, 25, TiePolicy::PlayerWins),
///     Outcome::PlayerWins(Reason::DealerBust)
/// );
/// assert_eq!(
///     settle(19, 19, TiePolicy::Push),
///     Outcome::Push(Reason::EqualValue)
/// );
/// ```
#[must_use]
pub const fn settle(player_value: u8, dealer_value: u8, tie_policy: TiePolicy) -> Outcome {
    if dealer_value > BUST_LIMIT {
        Outcome::PlayerWins(Reason::DealerBust)
    } else if dealer_value < player_value {
        Outcome::PlayerWins(Reason::HigherValue)
    } else if dealer_value > player_value {
        Outcome::DealerWins(Reason::HigherValue)
    } else {
        match tie_policy {
            TiePolicy::PlayerWins => Outcome::PlayerWins(Reason::EqualValue),
            TiePolicy::Push => Outcome::Push(Reason::EqualValue),
        }
    }
}

impl<S: Shoe> Round<S> {
    /// Dealer draws until reaching `dealer_stands_on` (18 by default) or more.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < self.rules.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            trace!(%card, dealer = self.dealer.value(), "dealer draws");
        }

        Ok(drawn_cards)
    }
}
