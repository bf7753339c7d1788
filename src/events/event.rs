//! Tracker events.
//!
//! Events tell the presentation layer what changed so it can redraw just
//! that part: a single tile, the hand rows, the status line.

use serde::{Deserialize, Serialize};

use crate::core::{Hands, Letter};
use crate::error::TrackerError;
use crate::turn::TurnState;

/// Event kind, used to index subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PoolUpdated,
    HandsUpdated,
    TurnChanged,
    DrawBufferUpdated,
    Notice,
    Reset,
}

impl EventKind {
    /// Every event kind.
    pub const ALL: [EventKind; 6] = [
        EventKind::PoolUpdated,
        EventKind::HandsUpdated,
        EventKind::TurnChanged,
        EventKind::DrawBufferUpdated,
        EventKind::Notice,
        EventKind::Reset,
    ];
}

/// A user-facing message for a refused or ignored action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short dialog title.
    pub title: String,
    /// Message body.
    pub message: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Notice for a click on a letter with no tiles left.
    #[must_use]
    pub fn exhausted(letter: Letter) -> Self {
        Self::new("Empty", format!("No {} tiles left in the bag.", letter))
    }
}

impl From<&TrackerError> for Notice {
    fn from(err: &TrackerError) -> Self {
        let title = match err {
            TrackerError::BagLocked => "Locked",
            TrackerError::EmptyWord => "Error",
            TrackerError::ResetNotConfirmed => "Reset",
            _ => "Not allowed",
        };
        Self::new(title, capitalize(&err.to_string()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>() + ".",
        None => String::new(),
    }
}

/// Something that changed in the tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// A tile count changed. Exhausted when `count` is zero.
    PoolUpdated { letter: Letter, count: u32 },

    /// Full snapshot of both hands.
    HandsUpdated { hands: Hands },

    /// Phase or active seat changed.
    TurnChanged { state: TurnState },

    /// Letters drawn so far in the current draw phase.
    DrawBufferUpdated { drawn: Vec<Letter> },

    /// An action was refused or ignored.
    Notice { notice: Notice },

    /// The tracker returned to setup.
    Reset,
}

impl TrackerEvent {
    /// Get the event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            TrackerEvent::PoolUpdated { .. } => EventKind::PoolUpdated,
            TrackerEvent::HandsUpdated { .. } => EventKind::HandsUpdated,
            TrackerEvent::TurnChanged { .. } => EventKind::TurnChanged,
            TrackerEvent::DrawBufferUpdated { .. } => EventKind::DrawBufferUpdated,
            TrackerEvent::Notice { .. } => EventKind::Notice,
            TrackerEvent::Reset => EventKind::Reset,
        }
    }

    /// Build a notice event.
    #[must_use]
    pub fn notice(notice: Notice) -> Self {
        TrackerEvent::Notice { notice }
    }
}
