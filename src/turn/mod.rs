//! Turn and phase state machine.
//!
//! ```text
//! Setup ──start(s)──▶ AwaitingPlay(s) ──play──▶ AwaitingDraw(s) ──finish──▶ AwaitingPlay(other) …
//!   ▲                                                                                  │
//!   └──────────────────────────────── reset (from any state) ─────────────────────────┘
//! ```
//!
//! There is no terminal state: turns alternate until the tracker is reset.

mod controller;

pub use controller::{TurnController, TurnState};
