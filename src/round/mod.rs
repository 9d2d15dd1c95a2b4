//! Round engine and state management.

use tracing::debug;

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::options::RoundRules;
use crate::outcome::{Outcome, Reason};

mod actions;
mod dealer;
pub mod state;

pub use dealer::settle;
pub use state::Phase;

/// Position of the dealer's face-down card.
pub const HOLE_CARD_INDEX: usize = 1;

/// One round of player versus dealer.
///
/// The round owns its card source and both hands. Drive it with
/// [`Round::hit`] and [`Round::resolve`], then read the result with
/// [`Round::outcome`].
///
/// # Example
///
/// ```
/// use bjcore::{Deck, Phase, Round};
///
/// let deck = Deck::new(1, 42).unwrap();
/// let mut round = Round::new(deck).unwrap();
/// if round.phase() == Phase::PlayerTurn {
///     let outcome = round.resolve().unwrap();
///     assert_eq!(round.outcome(), Some(outcome));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Round<S = Deck> {
    shoe: S,
    rules: RoundRules,
    phase: Phase,
    player: Hand,
    dealer: Hand,
    hole_revealed: bool,
    outcome: Option<Outcome>,
}

impl<S: Shoe> Round<S> {
    /// Starts a round with the default rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while dealing.
    pub fn new(shoe: S) -> Result<Self, DealError> {
        Self::with_rules(shoe, RoundRules::default())
    }

    /// Starts a round: resets the shoe and deals two cards to each party.
    ///
    /// The deck size is a property of the shoe and is not part of `rules`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer threshold is outside `1..=22` or the
    /// shoe runs out while dealing.
    pub fn with_rules(shoe: S, rules: RoundRules) -> Result<Self, DealError> {
        if !rules.is_valid() {
            return Err(DealError::InvalidDealerThreshold);
        }

        let mut round = Self {
            shoe,
            rules,
            phase: Phase::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
            hole_revealed: false,
            outcome: None,
        };
        round.deal()?;
        Ok(round)
    }

    /// Discards the current round and deals a fresh one from a reset shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while dealing.
    pub fn restart(&mut self) -> Result<(), DealError> {
        self.player.clear();
        self.dealer.clear();
        self.hole_revealed = false;
        self.outcome = None;
        self.deal()
    }

    fn deal(&mut self) -> Result<(), DealError> {
        self.phase = Phase::Dealing;
        self.shoe.reset();

        for _ in 0..2 {
            let card = self.shoe.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.player.add_card(card);
            let card = self.shoe.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        debug!(
            player = self.player.value(),
            dealer_up = self.dealer_value(false),
            "opening hands dealt"
        );

        // Two face cards already make 22.
        if self.player.is_bust() {
            self.finish(Outcome::DealerWins(Reason::PlayerBust));
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<Card, ActionError> {
        self.shoe.draw().map_err(|_| ActionError::NoCards)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
        debug!(
            ?outcome,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round resolved"
        );
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome, or `None` until the round is resolved.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the value of the player's hand.
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's value as the presentation layer should show it.
    ///
    /// While the hole card is face down only the other cards count, unless
    /// `reveal_hidden` is set. Scoring always uses the full hand.
    pub fn dealer_value(&self, reveal_hidden: bool) -> u8 {
        if reveal_hidden || self.hole_revealed {
            return self.dealer.value();
        }

        self.dealer.value_excluding(HOLE_CARD_INDEX)
    }

    /// Returns the dealer's face-up card.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// Returns whether the dealer's hole card has been turned over.
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the rules the round is played under.
    pub const fn rules(&self) -> &RoundRules {
        &self.rules
    }

    /// Returns the number of cards left in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the card source.
    pub const fn shoe(&self) -> &S {
        &self.shoe
    }

    /// Consumes the round and returns its card source.
    pub fn into_shoe(self) -> S {
        self.shoe
    }
}
