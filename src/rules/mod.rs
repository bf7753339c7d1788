//! Tracker rules.
//!
//! `apply` takes a `TrackerState` and an `Action` and either performs the
//! transition or refuses it:
//! - Phase checks (what may happen in setup, play, draw)
//! - Bag-click policy per phase
//! - Play resolution against the active hand
//! - Reset confirmation
//! - Which accepted actions enter the history (`record`)
//!
//! Observers, history and logging sit one layer up in `Tracker`.

pub mod engine;

pub use engine::{apply, record, replay, Applied, Outcome};
