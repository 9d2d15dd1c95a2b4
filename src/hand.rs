//! Hand representation shared by the player and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest hand value that is not bust.
pub const BUST_LIMIT: u8 = 21;

fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    cards
        .into_iter()
        .fold(0_u8, |value, card| value.saturating_add(card.blackjack_value()))
}

/// An ordered sequence of cards belonging to one party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// The value is the plain sum of the cards' blackjack values; there is no
    /// soft/hard adjustment.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Calculates the value of the hand without the card at `index`.
    ///
    /// Used to show a hand with a face-down card. An out-of-range `index`
    /// gives the full value.
    #[must_use]
    pub fn value_excluding(&self, index: usize) -> u8 {
        evaluate_cards(
            self.cards
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != index)
                .map(|(_, card)| card),
        )
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
