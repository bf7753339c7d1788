//! # tile-tracker
//!
//! Bookkeeping aid for a two-player lettered-tile game played on a real
//! table. It follows the shared pool, both hands, and whose turn it is, as
//! the user clicks tiles and types in played words.
//!
//! ## Design Principles
//!
//! 1. **The user is the source of truth**: there is no dictionary, no
//!    scoring and no random draw. Played words are taken out of hands on a
//!    best-effort basis and never refused for not matching.
//!
//! 2. **Explicit state**: `TrackerState` is a plain value. `rules::apply`
//!    is the state machine; it mutates the state and returns events.
//!
//! 3. **Observers, not widgets**: front ends subscribe to `TrackerEvent`s
//!    through the `EventBus` instead of reaching into the state.
//!
//! ## Modules
//!
//! - `core`: letters, seats, configuration, actions, state
//! - `pool`: per-letter tile counts
//! - `hand`: hand slots and play resolution
//! - `turn`: setup / play / draw phase controller
//! - `rules`: action application
//! - `events`: change notifications and the event bus
//! - `tracker`: action intake façade with history and logging
//! - `cli`: command parser and text renderer for the terminal driver

pub mod core;
pub mod error;
pub mod pool;
pub mod hand;
pub mod turn;
pub mod rules;
pub mod events;
pub mod tracker;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    Letter, LETTER_COUNT,
    Seat, SeatMap,
    TrackerConfig,
    Action, ActionRecord,
    Hands, TrackerState,
};

pub use crate::error::{ConfigError, ParseError, TrackerError};

pub use crate::pool::{TilePool, TileView};

pub use crate::hand::{Hand, HandSlots, PlayResolution, Slot};

pub use crate::turn::{TurnController, TurnState};

pub use crate::rules::{Applied, Outcome};

pub use crate::events::{EventBus, EventKind, Notice, SubscriptionId, TrackerEvent, TrackerObserver};

pub use crate::tracker::Tracker;
