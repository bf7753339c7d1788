//! Per-letter tile counts.

use serde::{Deserialize, Serialize};

use crate::core::letter::{Letter, LETTER_COUNT};

/// Remaining tile counts for every letter.
///
/// ## Usage
///
/// ```
/// use tile_tracker::core::Letter;
/// use tile_tracker::pool::TilePool;
///
/// let mut pool = TilePool::new(1);
/// let z = Letter::from_char('Z').unwrap();
///
/// assert_eq!(pool.decrement(z), Some(0));
/// assert!(pool.is_exhausted(z));
///
/// // Further clicks are refused, the count stays at zero
/// assert_eq!(pool.decrement(z), None);
/// assert_eq!(pool.count(z), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    counts: [u32; LETTER_COUNT],
    start_count: u32,
}

/// Snapshot of a single tile in the pool grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub letter: Letter,
    pub count: u32,
    /// True when the count is zero; the tile is drawn dimmed.
    pub exhausted: bool,
}

impl TilePool {
    /// Create a full pool with `start_count` tiles per letter.
    #[must_use]
    pub fn new(start_count: u32) -> Self {
        Self {
            counts: [start_count; LETTER_COUNT],
            start_count,
        }
    }

    /// Get the configured per-letter start count.
    #[must_use]
    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    /// Get the remaining count for a letter.
    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Check whether a letter has run out.
    #[must_use]
    pub fn is_exhausted(&self, letter: Letter) -> bool {
        self.count(letter) == 0
    }

    /// Take one tile of `letter` out of the pool.
    ///
    /// Returns the new count, or `None` (and leaves the pool untouched) if
    /// the letter is already exhausted.
    pub fn decrement(&mut self, letter: Letter) -> Option<u32> {
        let count = &mut self.counts[letter.index()];
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(*count)
    }

    /// Restore every letter to the start count.
    pub fn reset(&mut self) {
        self.counts = [self.start_count; LETTER_COUNT];
    }

    /// Get the total number of tiles left across all letters.
    #[must_use]
    pub fn total_remaining(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Get a view of one tile.
    #[must_use]
    pub fn tile(&self, letter: Letter) -> TileView {
        let count = self.count(letter);
        TileView {
            letter,
            count,
            exhausted: count == 0,
        }
    }

    /// Iterate over all tiles in alphabetical order.
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        Letter::all().map(move |letter| self.tile(letter))
    }
}
