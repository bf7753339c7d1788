//! Shared tile pool.
//!
//! The pool holds one counter per letter. Counts only ever move down through
//! clicks, and come back up only through a reset.
//!
//! ## Key Types
//!
//! - `TilePool`: per-letter counts with saturating decrement
//! - `TileView`: read-only view of one grid tile (count, exhausted flag)

mod tile_pool;

pub use tile_pool::{TilePool, TileView};
