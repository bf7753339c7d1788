//! Core tracker types: letters, seats, configuration, actions, state.
//!
//! These are the values the rest of the crate passes around. Behaviour
//! lives in `pool`, `hand`, `turn` and `rules`.

pub mod letter;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use letter::{Letter, LETTER_COUNT};
pub use player::{Seat, SeatMap};
pub use config::{TrackerConfig, DEFAULT_HAND_SIZE, DEFAULT_START_COUNT};
pub use action::{Action, ActionRecord};
pub use state::{Hands, TrackerState};
