//! Player hands and play resolution.
//!
//! A hand is an ordered row of slots. The user's slots are letters or
//! blanks; the opponent's start as unknown markers and fill with letters
//! as draws are recorded.
//!
//! Recording a played word removes tiles on a best-effort basis: the
//! tracker trusts whatever the user typed and never refuses a play because
//! the hand looks wrong.

mod slots;

pub use slots::{Hand, HandSlots, PlayResolution, Slot};
