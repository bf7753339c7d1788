//! Line commands for the terminal driver.

use crate::core::{Action, Letter, Seat};
use crate::error::ParseError;
use crate::hand::{HandSlots, Slot};

/// One line of driver input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Apply a tracker action.
    Act(Action),
    /// Print the board.
    Show,
    /// Print the accepted actions so far.
    History,
    /// Print command help.
    Help,
    /// Leave the driver.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  bag <LETTER>...         click tiles in the bag (setup: adjust, draw phase: draw)
  hand <SLOT>...          set your starting hand (letters, _ for blank)
  start <user|opponent>   start the game with that player
  play <WORD>             record the word the current player played
  done                    finish drawing and pass the turn
  reset --yes             clear everything and return to setup
  show                    print the bag, hands and status
  history                 list actions since the last reset
  help                    show this help
  quit                    exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// `bag` accepts several letters and expands to one click each.
    pub fn parse(line: &str) -> Result<Option<Vec<Command>>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let commands = match head.to_ascii_lowercase().as_str() {
            "bag" | "b" | "draw" => {
                if args.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "bag",
                        expected: "at least one letter",
                    });
                }
                args.iter()
                    .flat_map(|arg| arg.chars())
                    .map(|c| {
                        Letter::try_from(c).map(|letter| Command::Act(Action::BagClick { letter }))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            "hand" => {
                if args.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "hand",
                        expected: "one slot per tile",
                    });
                }
                let slots = args
                    .iter()
                    .map(|arg| arg.parse::<Slot>())
                    .collect::<Result<HandSlots, _>>()?;
                vec![Command::Act(Action::EditHand { slots })]
            }
            "start" => {
                let seat = single(&args, "start", "user or opponent")?.parse::<Seat>()?;
                vec![Command::Act(Action::StartGame { starter: seat })]
            }
            "play" | "p" => {
                let word = single(&args, "play", "a word")?;
                vec![Command::Act(Action::SubmitPlay {
                    word: word.to_string(),
                })]
            }
            "done" | "finish" | "d" => {
                no_args(&args)?;
                vec![Command::Act(Action::FinishDraw)]
            }
            "reset" => {
                let confirmed = match args.as_slice() {
                    [] => false,
                    ["--yes"] | ["-y"] | ["yes"] => true,
                    [other, ..] => return Err(ParseError::UnexpectedArgument(other.to_string())),
                };
                vec![Command::Act(Action::Reset { confirmed })]
            }
            "show" | "s" => {
                no_args(&args)?;
                vec![Command::Show]
            }
            "history" => {
                no_args(&args)?;
                vec![Command::History]
            }
            "help" | "?" => vec![Command::Help],
            "quit" | "exit" | "q" => vec![Command::Quit],
            _ => return Err(ParseError::UnknownCommand(head.to_string())),
        };

        Ok(Some(commands))
    }
}

fn single<'a>(
    args: &[&'a str],
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    match args {
        [arg] => Ok(*arg),
        [] => Err(ParseError::MissingArgument { command, expected }),
        [_, extra, ..] => Err(ParseError::UnexpectedArgument(extra.to_string())),
    }
}

fn no_args(args: &[&str]) -> Result<(), ParseError> {
    match args.first() {
        Some(extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
        None => Ok(()),
    }
}
