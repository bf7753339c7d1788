//! Error types.
//!
//! Only user input can fail. Pool exhaustion and hands that don't match a
//! played word are handled permissively and never show up here.

use thiserror::Error;

use crate::turn::TurnState;

/// A rejected tracker action. The state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("please enter a word")]
    EmptyWord,

    #[error("the bag is locked until you submit a played word")]
    BagLocked,

    #[error("cannot {action} during {phase}")]
    WrongPhase {
        action: &'static str,
        phase: TurnState,
    },

    #[error("hands can only be edited before the game starts")]
    HandLocked,

    #[error("your hand can only hold letters and blanks")]
    InvalidSlot,

    #[error("a hand needs exactly {expected} slots, got {got}")]
    HandSize { expected: usize, got: usize },

    #[error("reset must be confirmed")]
    ResetNotConfirmed,
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("hand size must be at least 1")]
    ZeroHandSize,
}

/// Failure to parse a letter, seat, or driver command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a tile letter")]
    InvalidLetter(char),

    #[error("expected a single letter, got '{0}'")]
    InvalidLetterToken(String),

    #[error("unknown player '{0}' (use user or opponent)")]
    UnknownSeat(String),

    #[error("unknown command '{0}' (try help)")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}
