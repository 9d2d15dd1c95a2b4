//! Game configuration options.

use crate::hand::BUST_LIMIT;

/// Dealer value at which the dealer stops drawing.
///
/// The dealer draws through 17 and stands on 18 or more.
pub const DEALER_STANDS_ON: u8 = 18;

/// Tie policy used when none is configured.
pub const DEFAULT_TIE_POLICY: TiePolicy = TiePolicy::PlayerWins;

/// How a round with equal player and dealer values is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TiePolicy {
    /// Ties go to the player.
    #[default]
    PlayerWins,
    /// Ties are a push; nobody wins.
    Push,
}

/// Rules a [`Round`](crate::Round) is played under.
///
/// ```
/// use bjcore::{RoundRules, TiePolicy};
///
/// let rules = RoundRules::default().with_tie_policy(TiePolicy::Push);
/// assert_eq!(rules.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    /// Dealer value at which the dealer stands.
    ///
    /// Must lie in `1..=22`; anything else lets the dealer stand on nothing or
    /// forces a bust.
    pub dealer_stands_on: u8,
    /// Settlement of equal values.
    pub tie_policy: TiePolicy,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
            tie_policy: DEFAULT_TIE_POLICY,
        }
    }
}

impl RoundRules {
    /// Sets the dealer value at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the tie policy.
    #[must_use]
    pub const fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    /// Returns whether the dealer threshold is in `1..=22`.
    ///
    /// ```
    /// use bjcore::RoundRules;
    ///
    /// assert!(RoundRules::default().is_valid());
    /// assert!(!RoundRules::default().with_dealer_stands_on(0).is_valid());
    /// assert!(!RoundRules::default().with_dealer_stands_on(23).is_valid());
    /// ```
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.dealer_stands_on >= 1 && self.dealer_stands_on <= BUST_LIMIT + 1
    }
}

/// Configuration options for a table of sessions.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::{GameOptions, TiePolicy};
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_tie_policy(TiePolicy::Push);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of standard 52-card decks each session's deck is built from.
    pub decks: u8,
    /// Rules every round is played under.
    pub rules: RoundRules,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            rules: RoundRules::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the dealer value at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(17);
    /// assert_eq!(options.rules.dealer_stands_on, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.rules.dealer_stands_on = value;
        self
    }

    /// Sets the tie policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, TiePolicy};
    ///
    /// let options = GameOptions::default().with_tie_policy(TiePolicy::Push);
    /// assert_eq!(options.rules.tie_policy, TiePolicy::Push);
    /// ```
    #[must_use]
    pub const fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.rules.tie_policy = policy;
        self
    }
}
