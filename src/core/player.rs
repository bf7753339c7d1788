//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The tracker always follows exactly two players: the person using the
//! tool (`User`) and the person across the table (`Opponent`).
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`, used for hands and any other
//! per-player data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// The person operating the tracker.
    User,
    /// The other player, whose tiles are mostly unknown.
    Opponent,
}

impl Seat {
    /// Both seats, user first.
    pub const ALL: [Seat; 2] = [Seat::User, Seat::Opponent];

    /// Get the other seat.
    ///
    /// ```
    /// use tile_tracker::core::Seat;
    ///
    /// assert_eq!(Seat::User.other(), Seat::Opponent);
    /// assert_eq!(Seat::Opponent.other(), Seat::User);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::User => Seat::Opponent,
            Seat::Opponent => Seat::User,
        }
    }

    /// Get the storage index (user = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::User => 0,
            Seat::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::User => write!(f, "user"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

impl std::str::FromStr for Seat {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "me" | "u" => Ok(Seat::User),
            "opponent" | "opp" | "them" | "o" => Ok(Seat::Opponent),
            _ => Err(crate::error::ParseError::UnknownSeat(s.to_string())),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tile_tracker::core::{Seat, SeatMap};
///
/// let mut sizes: SeatMap<usize> = SeatMap::new(|_| 7);
/// sizes[Seat::Opponent] -= 3;
///
/// assert_eq!(sizes[Seat::User], 7);
/// assert_eq!(sizes[Seat::Opponent], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::User), factory(Seat::Opponent)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs, user first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
