//! Deck construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, FAMILIES_PER_DECK};
use crate::error::DeckError;

/// A source of cards for a round.
///
/// [`Deck`] is the production implementation. The trait exists so a round can
/// be driven by any card source with the same contract, such as a scripted
/// sequence in tests.
pub trait Shoe {
    /// Returns every card to the draw pile and shuffles it.
    fn reset(&mut self);

    /// Removes and returns one card from the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the draw pile is exhausted.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Returns the number of cards left in the draw pile.
    fn remaining(&self) -> usize;
}

/// A deck built from one or more standard 52-card decks.
///
/// The full composition is an immutable template; [`Deck::reset`] copies it
/// into the draw pile and shuffles the copy.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    decks: u8,
    composition: Vec<Card>,
    pile: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled deck made of `decks` standard decks, seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidConfiguration`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Deck;
    ///
    /// let deck = Deck::new(2, 42).unwrap();
    /// assert_eq!(deck.remaining(), 104);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, DeckError> {
        Self::with_rng(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a shuffled deck that draws its shuffles from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidConfiguration`] if `decks` is zero.
    pub fn with_rng(decks: u8, rng: R) -> Result<Self, DeckError> {
        if decks == 0 {
            return Err(DeckError::InvalidConfiguration);
        }

        let composition = Self::create_composition(decks);
        let mut deck = Self {
            decks,
            pile: Vec::with_capacity(composition.len()),
            composition,
            rng,
        };
        deck.reset();
        Ok(deck)
    }

    fn create_composition(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for _ in 0..FAMILIES_PER_DECK {
                cards.extend(Card::family());
            }
        }

        cards
    }

    /// Restores the draw pile to the full composition and shuffles it.
    pub fn reset(&mut self) {
        self.pile.clear();
        self.pile.extend_from_slice(&self.composition);
        self.pile.shuffle(&mut self.rng);
        trace!(cards = self.pile.len(), "deck reshuffled");
    }

    /// Draws a card from the end of the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.pile.pop().ok_or(DeckError::Empty)?;
        trace!(%card, remaining = self.pile.len(), "card drawn");
        Ok(card)
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    /// Returns the full composition the deck resets to.
    #[must_use]
    pub fn composition(&self) -> &[Card] {
        &self.composition
    }

    /// Returns the cards currently in the draw pile, next draw last.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the number of standard decks in the composition.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the total number of cards in the composition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.composition.len()
    }

    /// Returns whether the composition is empty. Always `false` for a built deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }
}

impl<R: Rng> Shoe for Deck<R> {
    fn reset(&mut self) {
        Self::reset(self);
    }

    fn draw(&mut self) -> Result<Card, DeckError> {
        Self::draw(self)
    }

    fn remaining(&self) -> usize {
        Self::remaining(self)
    }
}
