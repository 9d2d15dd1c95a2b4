//! Card types and blackjack values.

use core::fmt;

/// Value every face card scores.
///
/// Face cards count 11 here rather than the 10 of casino blackjack.
pub const FACE_VALUE: u8 = 11;

/// Number of ranks in one family (1 through 10, Jack, Queen, King).
pub const FAMILY_SIZE: usize = 13;

/// Families per standard deck.
pub const FAMILIES_PER_DECK: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = FAMILY_SIZE * FAMILIES_PER_DECK;

/// A face symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Face {
    /// All face symbols, in family order.
    pub const ALL: [Self; 3] = [Self::Jack, Self::Queen, Self::King];

    const fn symbol(self) -> char {
        match self {
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// A playing card.
///
/// Cards carry no suit and no visibility state; neither affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A numeric card (1 through 10).
    ///
    /// Note: the variant does not validate the rank. Use [`Card::numeric`] for
    /// ranks from outside input; [`Card::family`] only yields 1..=10.
    Numeric(u8),
    /// A face card.
    Face(Face),
}

impl Card {
    /// Creates a numeric card, or `None` if `rank` is outside 1..=10.
    ///
    /// ```
    /// use bjcore::Card;
    ///
    /// assert_eq!(Card::numeric(7), Some(Card::Numeric(7)));
    /// assert_eq!(Card::numeric(0), None);
    /// assert_eq!(Card::numeric(11), None);
    /// ```
    #[must_use]
    pub const fn numeric(rank: u8) -> Option<Self> {
        if matches!(rank, 1..=10) {
            Some(Self::Numeric(rank))
        } else {
            None
        }
    }

    /// Returns the blackjack value of the card.
    ///
    /// Numeric cards are worth their rank, every face card is worth
    /// [`FACE_VALUE`].
    #[must_use]
    pub const fn blackjack_value(self) -> u8 {
        match self {
            Self::Numeric(rank) => rank,
            Self::Face(_) => FACE_VALUE,
        }
    }

    /// Returns whether this is a face card.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Face(_))
    }

    /// Returns one family of cards: 1 through 10, then Jack, Queen, King.
    pub fn family() -> impl Iterator<Item = Self> {
        (1..=10)
            .filter_map(Self::numeric)
            .chain(Face::ALL.into_iter().map(Self::Face))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(rank) => write!(f, "{rank}"),
            Self::Face(face) => write!(f, "{}", face.symbol()),
        }
    }
}
