//! The tracker façade.
//!
//! `Tracker` owns a `TrackerState` and an `EventBus`. Every user action goes
//! through `dispatch`, which applies it, records accepted actions in the
//! history, logs the transition, and publishes events. Refused actions
//! publish a `Notice` and leave the state alone.
//!
//! ```
//! use tile_tracker::{Seat, Tracker, TurnState};
//!
//! let mut tracker = Tracker::default();
//! tracker.start_game(Seat::User).unwrap();
//! tracker.submit_play("hi").unwrap();
//! tracker.bag_click('e'.try_into().unwrap()).unwrap();
//! tracker.finish_draw().unwrap();
//!
//! assert_eq!(tracker.turn_state(), TurnState::AwaitingPlay(Seat::Opponent));
//! ```

use tracing::{debug, info};

use crate::core::{Action, ActionRecord, Letter, Seat, TrackerConfig, TrackerState};
use crate::error::TrackerError;
use crate::events::{EventBus, EventKind, Notice, SubscriptionId, TrackerEvent, TrackerObserver};
use crate::hand::{Hand, HandSlots, PlayResolution, Slot};
use crate::pool::TileView;
use crate::rules::{self, Outcome};
use crate::turn::TurnState;

/// Stateful action intake with change notifications.
#[derive(Debug)]
pub struct Tracker {
    state: TrackerState,
    bus: EventBus,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracker {
    /// Create a tracker in the setup phase.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self::from_state(TrackerState::new(config))
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(state: TrackerState) -> Self {
        Self {
            state,
            bus: EventBus::new(),
        }
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Take the state out, dropping subscriptions.
    #[must_use]
    pub fn into_state(self) -> TrackerState {
        self.state
    }

    // === Subscriptions ===

    /// Subscribe an observer to some event kinds.
    pub fn subscribe(
        &mut self,
        kinds: &[EventKind],
        observer: impl TrackerObserver + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(kinds, observer)
    }

    /// Subscribe an observer to every event.
    pub fn subscribe_all(&mut self, observer: impl TrackerObserver + 'static) -> SubscriptionId {
        self.bus.subscribe_all(observer)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // === Action intake ===

    /// Apply an action, record it, and notify observers.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, TrackerError> {
        let seat = self.state.turn_state().active_seat();
        let turn = self.state.turns.turn_number();

        match rules::apply(&mut self.state, &action) {
            Ok(applied) => {
                self.log_outcome(&applied.outcome);
                rules::record(&mut self.state, seat, turn, &action, &applied.outcome);
                self.bus.publish_all(&applied.events);
                Ok(applied.outcome)
            }
            Err(err) => {
                debug!(action = action.name(), error = %err, "action refused");
                self.bus.publish(&TrackerEvent::notice(Notice::from(&err)));
                Err(err)
            }
        }
    }

    /// Take a tile out of the pool during setup.
    pub fn setup_decrement(&mut self, letter: Letter) -> Result<Outcome, TrackerError> {
        self.dispatch(Action::SetupDecrement { letter })
    }

    /// Replace the user's starting hand.
    pub fn edit_hand(&mut self, slots: impl IntoIterator<Item = Slot>) -> Result<Outcome, TrackerError> {
        let slots: HandSlots = slots.into_iter().collect();
        self.dispatch(Action::EditHand { slots })
    }

    /// Leave setup with `starter` to play first.
    pub fn start_game(&mut self, starter: Seat) -> Result<Outcome, TrackerError> {
        self.dispatch(Action::StartGame { starter })
    }

    /// Record the active seat's played word.
    ///
    /// Returns how the word was taken out of the hand.
    pub fn submit_play(&mut self, word: &str) -> Result<PlayResolution, TrackerError> {
        match self.dispatch(Action::SubmitPlay {
            word: word.to_string(),
        })? {
            Outcome::Played { resolution, .. } => Ok(resolution),
            other => unreachable!("submitting a play produced {:?}", other),
        }
    }

    /// Click a tile in the bag.
    pub fn bag_click(&mut self, letter: Letter) -> Result<Outcome, TrackerError> {
        self.dispatch(Action::BagClick { letter })
    }

    /// Commit the draw buffer and pass the turn.
    pub fn finish_draw(&mut self) -> Result<Outcome, TrackerError> {
        self.dispatch(Action::FinishDraw)
    }

    /// Return to setup. Refused unless `confirmed`.
    pub fn reset(&mut self, confirmed: bool) -> Result<Outcome, TrackerError> {
        self.dispatch(Action::Reset { confirmed })
    }

    // === Queries ===

    /// Get the current turn state.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.state.turn_state()
    }

    /// Get a seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        self.state.hand(seat)
    }

    /// Get the remaining count for a letter.
    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.state.pool.count(letter)
    }

    /// Get every tile in the bag grid.
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.state.pool.tiles()
    }

    /// Get the letters drawn so far this phase.
    #[must_use]
    pub fn draw_buffer(&self) -> &[Letter] {
        self.state.turns.draw_buffer()
    }

    /// Check if the bag is locked (play phase).
    #[must_use]
    pub fn bag_locked(&self) -> bool {
        self.turn_state().bag_locked()
    }

    /// Check if the user's hand can still be edited.
    #[must_use]
    pub fn hand_editable(&self) -> bool {
        self.turn_state().is_setup()
    }

    /// Get the status line for the current phase.
    #[must_use]
    pub fn status(&self) -> String {
        self.state.turns.status()
    }

    /// Get the accepted actions since the last reset.
    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        &self.state.history
    }

    fn log_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Adjusted { letter, remaining } => {
                debug!(%letter, remaining, "setup adjustment")
            }
            Outcome::Drawn { letter, remaining } => {
                debug!(%letter, remaining, "tile drawn")
            }
            Outcome::Ignored { letter } => debug!(%letter, "exhausted tile clicked"),
            Outcome::HandEdited => debug!(hand = %self.hand(Seat::User), "hand edited"),
            Outcome::Started { starter } => info!(%starter, "game started"),
            Outcome::Played { seat, resolution } => info!(
                %seat,
                removed = resolution.removed(),
                unresolved = resolution.unresolved.len(),
                "play recorded, drawing"
            ),
            Outcome::TurnPassed { seat, drawn, next } => info!(
                %seat,
                drawn = drawn.len(),
                %next,
                turn = self.state.turns.turn_number(),
                "turn passed"
            ),
            Outcome::Reset => info!("tracker reset"),
        }
    }
}
