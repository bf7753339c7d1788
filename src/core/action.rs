//! Action intake.
//!
//! Every change to the tracker comes from one explicit user action. Actions
//! are plain values so they can be logged, recorded in history, and replayed
//! against a fresh state.

use serde::{Deserialize, Serialize};

use super::letter::Letter;
use super::player::Seat;
use crate::hand::HandSlots;

/// A user action against the tracker.
///
/// ## Example
///
/// ```
/// use tile_tracker::core::{Action, Letter, Seat};
///
/// let start = Action::StartGame { starter: Seat::User };
/// let play = Action::SubmitPlay { word: "cat".into() };
/// let click = Action::BagClick { letter: Letter::from_char('E').unwrap() };
///
/// assert_eq!(start.name(), "start the game");
/// assert_eq!(play.name(), "submit a play");
/// assert_eq!(click.name(), "click the bag");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take one tile out of the pool before the game starts.
    SetupDecrement { letter: Letter },

    /// Replace the user's starting hand. Setup only.
    EditHand { slots: HandSlots },

    /// Leave setup; `starter` plays first.
    StartGame { starter: Seat },

    /// Record the word the active seat just played.
    SubmitPlay { word: String },

    /// Click a tile in the bag grid. Meaning depends on the phase.
    BagClick { letter: Letter },

    /// Commit the clicked draws to the active hand and pass the turn.
    FinishDraw,

    /// Return to setup. Ignored unless `confirmed`.
    Reset { confirmed: bool },
}

impl Action {
    /// Short verb phrase used in logs and phase errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetupDecrement { .. } => "adjust the bag",
            Action::EditHand { .. } => "edit the hand",
            Action::StartGame { .. } => "start the game",
            Action::SubmitPlay { .. } => "submit a play",
            Action::BagClick { .. } => "click the bag",
            Action::FinishDraw => "finish drawing",
            Action::Reset { .. } => "reset",
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat whose turn it was, `None` during setup.
    pub seat: Option<Seat>,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the overall history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Option<Seat>, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}
