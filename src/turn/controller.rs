//! Turn controller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Letter, Seat};
use crate::error::TrackerError;

/// Letters clicked during the current draw phase.
pub type DrawBuffer = SmallVec<[Letter; 8]>;

/// Which phase the table is in, and for whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// Before the game starts: hands are editable, bag clicks adjust counts.
    Setup,
    /// Waiting for the seat to record the word it played. The bag is locked.
    AwaitingPlay(Seat),
    /// Waiting for the seat to click the tiles it drew.
    AwaitingDraw(Seat),
}

impl TurnState {
    /// Get the seat whose turn it is, if the game has started.
    #[must_use]
    pub const fn active_seat(self) -> Option<Seat> {
        match self {
            TurnState::Setup => None,
            TurnState::AwaitingPlay(seat) | TurnState::AwaitingDraw(seat) => Some(seat),
        }
    }

    /// Check if the game has not started yet.
    #[must_use]
    pub const fn is_setup(self) -> bool {
        matches!(self, TurnState::Setup)
    }

    /// Check if bag clicks are refused.
    #[must_use]
    pub const fn bag_locked(self) -> bool {
        matches!(self, TurnState::AwaitingPlay(_))
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::Setup => write!(f, "setup"),
            TurnState::AwaitingPlay(seat) => write!(f, "the {} play phase", seat),
            TurnState::AwaitingDraw(seat) => write!(f, "the {} draw phase", seat),
        }
    }
}

/// Drives `TurnState` transitions and owns the draw buffer.
///
/// Every transition method checks the current phase first; an out-of-phase
/// call returns `TrackerError::WrongPhase` and changes nothing.
///
/// ```
/// use tile_tracker::core::{Letter, Seat};
/// use tile_tracker::turn::{TurnController, TurnState};
///
/// let mut turns = TurnController::new();
/// turns.start(Seat::Opponent).unwrap();
/// turns.begin_draw().unwrap();
/// turns.record_draw(Letter::from_char('E').unwrap()).unwrap();
///
/// let (seat, drawn) = turns.finish_draw().unwrap();
/// assert_eq!(seat, Seat::Opponent);
/// assert_eq!(drawn.len(), 1);
/// assert_eq!(turns.state(), TurnState::AwaitingPlay(Seat::User));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    state: TurnState,
    draw_buffer: DrawBuffer,
    /// Starts at 1, advances each time a draw phase finishes.
    turn_number: u32,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Create a controller in the setup phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TurnState::Setup,
            draw_buffer: DrawBuffer::new(),
            turn_number: 1,
        }
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Get the current turn number.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Get the letters drawn so far in this draw phase.
    #[must_use]
    pub fn draw_buffer(&self) -> &[Letter] {
        &self.draw_buffer
    }

    /// Setup → AwaitingPlay(starter).
    pub fn start(&mut self, starter: Seat) -> Result<(), TrackerError> {
        self.expect_setup("start the game")?;
        self.state = TurnState::AwaitingPlay(starter);
        self.draw_buffer.clear();
        Ok(())
    }

    /// AwaitingPlay(seat) → AwaitingDraw(seat), with an empty draw buffer.
    ///
    /// Returns the seat that played.
    pub fn begin_draw(&mut self) -> Result<Seat, TrackerError> {
        let seat = self.expect_play("submit a play")?;
        self.state = TurnState::AwaitingDraw(seat);
        self.draw_buffer.clear();
        Ok(seat)
    }

    /// Add a drawn letter to the buffer.
    pub fn record_draw(&mut self, letter: Letter) -> Result<(), TrackerError> {
        self.expect_draw("record a draw")?;
        self.draw_buffer.push(letter);
        Ok(())
    }

    /// AwaitingDraw(seat) → AwaitingPlay(other).
    ///
    /// Returns the seat that drew and the letters to add to its hand.
    pub fn finish_draw(&mut self) -> Result<(Seat, DrawBuffer), TrackerError> {
        let seat = self.expect_draw("finish drawing")?;
        let drawn = std::mem::take(&mut self.draw_buffer);
        self.state = TurnState::AwaitingPlay(seat.other());
        self.turn_number += 1;
        Ok((seat, drawn))
    }

    /// Any state → Setup.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Human-readable instruction for the current phase.
    #[must_use]
    pub fn status(&self) -> String {
        match self.state {
            TurnState::Setup => "Setup Phase: Set your hand and adjust bag if needed.".to_string(),
            TurnState::AwaitingPlay(Seat::User) => {
                "YOUR TURN: Enter the word you played.".to_string()
            }
            TurnState::AwaitingPlay(Seat::Opponent) => {
                "OPPONENT'S TURN: Enter the word they played.".to_string()
            }
            TurnState::AwaitingDraw(_) if !self.draw_buffer.is_empty() => {
                let drawn: Vec<String> = self.draw_buffer.iter().map(ToString::to_string).collect();
                format!("Drawing: {}", drawn.join(", "))
            }
            TurnState::AwaitingDraw(seat) => {
                let who = match seat {
                    Seat::User => "YOU",
                    Seat::Opponent => "THEY",
                };
                format!("Update the Bag: Click the letters that {} drew.", who)
            }
        }
    }

    fn expect_setup(&self, action: &'static str) -> Result<(), TrackerError> {
        match self.state {
            TurnState::Setup => Ok(()),
            phase => Err(TrackerError::WrongPhase { action, phase }),
        }
    }

    fn expect_play(&self, action: &'static str) -> Result<Seat, TrackerError> {
        match self.state {
            TurnState::AwaitingPlay(seat) => Ok(seat),
            phase => Err(TrackerError::WrongPhase { action, phase }),
        }
    }

    fn expect_draw(&self, action: &'static str) -> Result<Seat, TrackerError> {
        match self.state {
            TurnState::AwaitingDraw(seat) => Ok(seat),
            phase => Err(TrackerError::WrongPhase { action, phase }),
        }
    }
}
