//! Round phase types.

/// Round phase.
///
/// Phases only move forward; a finished round is replaced by
/// [`Round::restart`](super::Round::restart) rather than rewound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is fixed.
    Resolved,
}
