//! Tile letters.
//!
//! Every tile in the pool carries one of the 26 letters `A`..=`Z`.
//! `Letter` is a validated newtype so the pool can be indexed without
//! bounds checks leaking into callers.
//!
//! ```
//! use tile_tracker::core::Letter;
//!
//! let q: Letter = 'q'.try_into().unwrap();
//! assert_eq!(q.as_char(), 'Q');
//! assert_eq!(q.index(), 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of distinct letters in the tile set.
pub const LETTER_COUNT: usize = 26;

/// A single tile letter, always upper case `A`..=`Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from its 0-based alphabet index.
    ///
    /// Returns `None` for indices past `Z`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < LETTER_COUNT {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Parse a character, accepting either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper as u8))
        } else {
            None
        }
    }

    /// Get the 0-based alphabet index (`A` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Get the letter as an upper case `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate over all letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(ParseError::InvalidLetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl std::str::FromStr for Letter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c),
            _ => Err(ParseError::InvalidLetterToken(s.to_string())),
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
