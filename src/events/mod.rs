//! Change notifications.
//!
//! The tracker never draws anything itself. After each accepted or refused
//! action it publishes `TrackerEvent`s, and whatever front end is attached
//! subscribes through the `EventBus`.
//!
//! ## Key Types
//!
//! - `TrackerEvent` / `EventKind`: what changed
//! - `Notice`: user-facing message for refused actions
//! - `TrackerObserver`: subscriber trait (closures implement it)
//! - `EventBus`: subscription index and synchronous delivery

mod bus;
mod event;

pub use bus::{EventBus, SubscriptionId, TrackerObserver};
pub use event::{EventKind, Notice, TrackerEvent};
