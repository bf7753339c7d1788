//! Tracker state.
//!
//! `TrackerState` is the whole game as the tracker sees it: pool counts,
//! both hands, the turn controller, and the action history. It is a plain
//! value; `rules::apply` moves it from one state to the next.
//!
//! Uses `im::Vector` for the history so cloning a state (for snapshots or
//! comparisons in tests) stays O(1) however long the game runs.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::TrackerConfig;
use super::player::{Seat, SeatMap};
use crate::hand::Hand;
use crate::pool::TilePool;
use crate::turn::{TurnController, TurnState};

/// Both hands, indexed by seat.
pub type Hands = SeatMap<Hand>;

/// Complete tracker state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    config: TrackerConfig,

    /// Shared tile pool.
    pub pool: TilePool,

    /// User and opponent hands.
    pub hands: Hands,

    /// Phase and active seat.
    pub turns: TurnController,

    /// Accepted actions, oldest first.
    pub history: Vector<ActionRecord>,
}

impl TrackerState {
    /// Create a fresh state in the setup phase.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            pool: TilePool::new(config.start_count),
            hands: Self::initial_hands(&config),
            turns: TurnController::new(),
            history: Vector::new(),
            config,
        }
    }

    /// Get the configuration this state was built from.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get the current turn state.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turns.state()
    }

    /// Get a seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    /// Return pool, hands, turns and history to their starting values.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.hands = Self::initial_hands(&self.config);
        self.turns.reset();
        self.history.clear();
    }

    /// Record an accepted action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the sequence number for the next recorded action.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    fn initial_hands(config: &TrackerConfig) -> Hands {
        SeatMap::new(|seat| Hand::initial(seat, config.hand_size))
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
