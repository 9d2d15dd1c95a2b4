//! Round outcome types.

/// Why a round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The winner had the higher value.
    HigherValue,
    /// Both hands had the same value.
    EqualValue,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins(Reason),
    /// The dealer wins.
    DealerWins(Reason),
    /// Push (tie); nobody wins.
    Push(Reason),
}

impl Outcome {
    /// Returns the reason attached to the outcome.
    #[must_use]
    pub const fn reason(self) -> Reason {
        match self {
            Self::PlayerWins(reason) | Self::DealerWins(reason) | Self::Push(reason) => reason,
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerWins(_))
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn is_dealer_win(self) -> bool {
        matches!(self, Self::DealerWins(_))
    }

    /// Returns whether the round was a push.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push(_))
    }
}
