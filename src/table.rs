//! Registry of independent per-session rounds.
//!
//! Rounds are single-owner values. When several sessions are played at once,
//! each needs its own [`Round`] and [`Deck`]; [`Table`] keeps them apart behind
//! one lock so a host can drive many games through a shared reference.

use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::GameOptions;
use crate::outcome::Outcome;
use crate::round::Round;
use crate::sync::Mutex;

/// Identifier handed out by [`Table::open`].
pub type SessionId = u32;

/// A set of concurrently played rounds sharing one rule set.
///
/// # Example
///
/// ```
/// use bjcore::{GameOptions, Table};
///
/// let table = Table::new(GameOptions::default());
/// let id = table.open(7).unwrap();
/// let value = table.with_session(id, |round| round.player_value());
/// assert!(value.is_some());
/// ```
pub struct Table {
    /// Rules every session is dealt with.
    pub options: GameOptions,
    next_id: AtomicU32,
    sessions: Mutex<HashMap<SessionId, Round>>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self::with_first_id(options, 0)
    }

    /// Creates an empty table whose session ids start at `first_id`.
    ///
    /// Hosts running several tables can give each one its own id range.
    #[must_use]
    pub fn with_first_id(options: GameOptions, first_id: SessionId) -> Self {
        Self {
            options,
            next_id: AtomicU32::new(first_id),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Opens a session with its own deck, shuffled from `seed`, and deals the
    /// first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured deck count is zero, the rules are
    /// invalid, the opening deal fails, or the id range is used up.
    pub fn open(&self, seed: u64) -> Result<SessionId, SessionError> {
        let deck = Deck::new(self.options.decks, seed)?;
        let round = Round::with_rules(deck, self.options.rules)?;

        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| SessionError::IdsExhausted)?;

        self.sessions.lock().insert(id, round);
        debug!(session = id, "session opened");

        Ok(id)
    }

    /// Closes a session. Returns `false` if it did not exist.
    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.sessions.lock().remove(&id).is_some();
        if removed {
            debug!(session = id, "session closed");
        }
        removed
    }

    /// Returns the number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Player action: Hit, in the given session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the hit is rejected.
    pub fn hit(&self, id: SessionId) -> Result<Card, SessionError> {
        let mut sessions = self.sessions.lock();
        let round = sessions.get_mut(&id).ok_or(SessionError::NotFound)?;
        Ok(round.hit()?)
    }

    /// Player action: Stand, in the given session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the stand is rejected.
    pub fn resolve(&self, id: SessionId) -> Result<Outcome, SessionError> {
        let mut sessions = self.sessions.lock();
        let round = sessions.get_mut(&id).ok_or(SessionError::NotFound)?;
        Ok(round.resolve()?)
    }

    /// Deals a fresh round in the given session from its reset deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the deal fails.
    pub fn restart(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock();
        let round = sessions.get_mut(&id).ok_or(SessionError::NotFound)?;
        Ok(round.restart()?)
    }

    /// Runs `f` against the session's round for read access.
    ///
    /// Returns `None` if the session does not exist.
    pub fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&Round) -> T) -> Option<T> {
        self.sessions.lock().get(&id).map(f)
    }
}
