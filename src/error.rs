//! Error types for deck, round and table operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck was configured with zero decks.
    #[error("deck count must be at least one")]
    InvalidConfiguration,
    /// No cards left in the draw pile.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The dealer threshold lies outside `1..=22`.
    #[error("dealer threshold must be between 1 and 22")]
    InvalidDealerThreshold,
    /// Not enough cards in the deck for the opening hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session not found.
    #[error("session not found")]
    NotFound,
    /// Every session id has been handed out.
    #[error("no session ids left")]
    IdsExhausted,
    /// The session's deck could not be built.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The opening deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}
