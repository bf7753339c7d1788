//! Action application.
//!
//! `apply` is the whole state machine: it checks the action against the
//! current phase, mutates the state, and returns what happened plus the
//! events a front end needs to redraw. It does no I/O and holds no
//! observers, so it can be driven directly in tests or replays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Action, ActionRecord, Letter, Seat, TrackerConfig, TrackerState};
use crate::error::TrackerError;
use crate::events::{Notice, TrackerEvent};
use crate::hand::{HandSlots, PlayResolution, Slot};
use crate::turn::TurnState;

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A setup click took a tile out of the pool.
    Adjusted { letter: Letter, remaining: u32 },

    /// A draw-phase click took a tile out of the pool into the draw buffer.
    Drawn { letter: Letter, remaining: u32 },

    /// The letter was exhausted; nothing changed.
    Ignored { letter: Letter },

    /// The user's starting hand was replaced.
    HandEdited,

    /// The game left setup.
    Started { starter: Seat },

    /// A word was taken out of `seat`'s hand; its draw phase began.
    Played {
        seat: Seat,
        resolution: PlayResolution,
    },

    /// `seat` finished drawing and the turn passed to `next`.
    TurnPassed {
        seat: Seat,
        drawn: Vec<Letter>,
        next: Seat,
    },

    /// The tracker returned to setup.
    Reset,
}

/// Result of a successful `apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub outcome: Outcome,
    pub events: Vec<TrackerEvent>,
}

impl Applied {
    fn new(outcome: Outcome, events: Vec<TrackerEvent>) -> Self {
        Self { outcome, events }
    }
}

/// Apply one action to the state.
///
/// On error the state is unchanged. Accepted actions are not recorded in
/// the history here; callers pass the outcome to `record`.
pub fn apply(state: &mut TrackerState, action: &Action) -> Result<Applied, TrackerError> {
    match action {
        Action::SetupDecrement { letter } => {
            if !state.turn_state().is_setup() {
                return Err(wrong_phase(state, action));
            }
            take_from_pool(state, *letter, false)
        }
        Action::EditHand { slots } => edit_hand(state, slots),
        Action::StartGame { starter } => {
            state.turns.start(*starter)?;
            Ok(Applied::new(
                Outcome::Started { starter: *starter },
                vec![turn_changed(state)],
            ))
        }
        Action::SubmitPlay { word } => submit_play(state, word),
        Action::BagClick { letter } => match state.turn_state() {
            TurnState::Setup => take_from_pool(state, *letter, false),
            TurnState::AwaitingPlay(_) => Err(TrackerError::BagLocked),
            TurnState::AwaitingDraw(_) => take_from_pool(state, *letter, true),
        },
        Action::FinishDraw => {
            let (seat, drawn) = state.turns.finish_draw()?;
            state.hands[seat].extend(drawn.iter().copied());
            let next = seat.other();
            Ok(Applied::new(
                Outcome::TurnPassed {
                    seat,
                    drawn: drawn.to_vec(),
                    next,
                },
                vec![hands_updated(state), turn_changed(state)],
            ))
        }
        Action::Reset { confirmed } => {
            if !confirmed {
                return Err(TrackerError::ResetNotConfirmed);
            }
            state.reset();

            let mut events = Vec::with_capacity(crate::core::LETTER_COUNT + 3);
            events.push(TrackerEvent::Reset);
            events.extend(state.pool.tiles().map(|tile| TrackerEvent::PoolUpdated {
                letter: tile.letter,
                count: tile.count,
            }));
            events.push(hands_updated(state));
            events.push(turn_changed(state));
            Ok(Applied::new(Outcome::Reset, events))
        }
    }
}

/// Build a fresh state and apply every action in order.
///
/// Refused actions are skipped, as they would be at the table.
#[must_use]
pub fn replay<'a>(config: TrackerConfig, actions: impl IntoIterator<Item = &'a Action>) -> TrackerState {
    let mut state = TrackerState::new(config);
    for action in actions {
        let seat = state.turn_state().active_seat();
        let turn = state.turns.turn_number();
        if let Ok(applied) = apply(&mut state, action) {
            record(&mut state, seat, turn, action, &applied.outcome);
        }
    }
    state
}

/// Append an accepted action to the history.
///
/// `seat` and `turn` are taken before the action was applied. A reset is
/// never recorded: it has just emptied the history.
pub fn record(
    state: &mut TrackerState,
    seat: Option<Seat>,
    turn: u32,
    action: &Action,
    outcome: &Outcome,
) {
    if *outcome == Outcome::Reset {
        return;
    }
    let sequence = state.next_sequence();
    state.record_action(ActionRecord::new(seat, action.clone(), turn, sequence));
}

fn take_from_pool(
    state: &mut TrackerState,
    letter: Letter,
    drawing: bool,
) -> Result<Applied, TrackerError> {
    let count = state.pool.count(letter);
    if count == 0 {
        debug!(%letter, "letter exhausted, click ignored");
        return Ok(Applied::new(
            Outcome::Ignored { letter },
            vec![TrackerEvent::notice(Notice::exhausted(letter))],
        ));
    }

    // Buffer first so a phase error leaves the pool untouched.
    if drawing {
        state.turns.record_draw(letter)?;
    }
    let taken = state.pool.decrement(letter);
    debug_assert_eq!(taken, Some(count - 1));
    let remaining = count - 1;

    let mut events = vec![TrackerEvent::PoolUpdated {
        letter,
        count: remaining,
    }];

    if drawing {
        events.push(TrackerEvent::DrawBufferUpdated {
            drawn: state.turns.draw_buffer().to_vec(),
        });
        Ok(Applied::new(Outcome::Drawn { letter, remaining }, events))
    } else {
        Ok(Applied::new(Outcome::Adjusted { letter, remaining }, events))
    }
}

fn edit_hand(state: &mut TrackerState, slots: &HandSlots) -> Result<Applied, TrackerError> {
    if !state.turn_state().is_setup() {
        return Err(TrackerError::HandLocked);
    }
    // Unknown markers belong to the opponent's hand.
    if slots.contains(&Slot::Unknown) {
        return Err(TrackerError::InvalidSlot);
    }
    let expected = state.config().hand_size;
    if slots.len() != expected {
        return Err(TrackerError::HandSize {
            expected,
            got: slots.len(),
        });
    }

    state.hands[Seat::User].set_slots(slots.iter().copied());
    Ok(Applied::new(Outcome::HandEdited, vec![hands_updated(state)]))
}

fn submit_play(state: &mut TrackerState, word: &str) -> Result<Applied, TrackerError> {
    // Phase first: a blank word outside the play phase is a phase error.
    let TurnState::AwaitingPlay(seat) = state.turn_state() else {
        return Err(TrackerError::WrongPhase {
            action: "submit a play",
            phase: state.turn_state(),
        });
    };

    let word = word.trim().to_uppercase();
    if word.is_empty() {
        return Err(TrackerError::EmptyWord);
    }

    let resolution = state.hands[seat].play(&word);
    if !resolution.is_complete() {
        debug!(
            %seat,
            word = %word,
            unresolved = ?resolution.unresolved,
            "played word not fully covered by hand"
        );
    }
    state.turns.begin_draw()?;

    Ok(Applied::new(
        Outcome::Played { seat, resolution },
        vec![hands_updated(state), turn_changed(state)],
    ))
}

fn wrong_phase(state: &TrackerState, action: &Action) -> TrackerError {
    TrackerError::WrongPhase {
        action: action.name(),
        phase: state.turn_state(),
    }
}

fn hands_updated(state: &TrackerState) -> TrackerEvent {
    TrackerEvent::HandsUpdated {
        hands: state.hands.clone(),
    }
}

fn turn_changed(state: &TrackerState) -> TrackerEvent {
    TrackerEvent::TurnChanged {
        state: state.turn_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn started(starter: Seat) -> TrackerState {
        let mut state = TrackerState::default();
        apply(&mut state, &Action::StartGame { starter }).unwrap();
        state
    }

    fn play(word: &str) -> Action {
        Action::SubmitPlay { word: word.into() }
    }

    fn click(c: char) -> Action {
        Action::BagClick { letter: letter(c) }
    }

    #[test]
    fn test_setup_click_adjusts_pool() {
        let mut state = TrackerState::default();

        let applied = apply(&mut state, &click('E')).unwrap();

        assert_eq!(
            applied.outcome,
            Outcome::Adjusted {
                letter: letter('E'),
                remaining: 9
            }
        );
        assert_eq!(
            applied.events,
            vec![TrackerEvent::PoolUpdated {
                letter: letter('E'),
                count: 9
            }]
        );
        assert!(state.turns.draw_buffer().is_empty());
    }

    #[test]
    fn test_setup_decrement_only_in_setup() {
        let mut state = started(Seat::User);
        let action = Action::SetupDecrement { letter: letter('A') };

        let err = apply(&mut state, &action).unwrap_err();

        assert!(matches!(err, TrackerError::WrongPhase { .. }));
        assert_eq!(state.pool.count(letter('A')), 10);
    }

    #[test]
    fn test_bag_locked_during_play() {
        let mut state = started(Seat::Opponent);
        let before = state.clone();

        let err = apply(&mut state, &click('A')).unwrap_err();

        assert_eq!(err, TrackerError::BagLocked);
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_click_fills_buffer() {
        let mut state = started(Seat::User);
        apply(&mut state, &play("HI")).unwrap();

        let applied = apply(&mut state, &click('R')).unwrap();

        assert_eq!(
            applied.outcome,
            Outcome::Drawn {
                letter: letter('R'),
                remaining: 9
            }
        );
        assert_eq!(state.turns.draw_buffer(), &[letter('R')]);
        assert_eq!(applied.events.len(), 2);
    }

    #[test]
    fn test_exhausted_click_ignored() {
        let mut state = TrackerState::new(TrackerConfig::new().with_start_count(1));
        apply(&mut state, &click('Q')).unwrap();

        let applied = apply(&mut state, &click('Q')).unwrap();

        assert_eq!(applied.outcome, Outcome::Ignored { letter: letter('Q') });
        assert_eq!(state.pool.count(letter('Q')), 0);
        assert!(matches!(applied.events[0], TrackerEvent::Notice { .. }));
    }

    #[test]
    fn test_exhausted_draw_click_not_buffered() {
        let mut state = TrackerState::new(TrackerConfig::new().with_start_count(0));
        apply(&mut state, &Action::StartGame { starter: Seat::User }).unwrap();
        apply(&mut state, &play("A")).unwrap();

        apply(&mut state, &click('A')).unwrap();

        assert!(state.turns.draw_buffer().is_empty());
    }

    #[test]
    fn test_empty_word_rejected() {
        let mut state = started(Seat::User);
        let before = state.clone();

        assert_eq!(apply(&mut state, &play("")), Err(TrackerError::EmptyWord));
        assert_eq!(apply(&mut state, &play("   ")), Err(TrackerError::EmptyWord));
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_in_setup_rejected() {
        let mut state = TrackerState::default();
        let err = apply(&mut state, &play("CAT")).unwrap_err();
        assert!(matches!(err, TrackerError::WrongPhase { phase: TurnState::Setup, .. }));
    }

    #[test]
    fn test_play_normalizes_word() {
        let mut state = TrackerState::default();
        let mut slots = HandSlots::new();
        for c in "DOGXYZ_".chars() {
            slots.push(c.to_string().parse::<Slot>().unwrap());
        }
        apply(&mut state, &Action::EditHand { slots }).unwrap();
        apply(&mut state, &Action::StartGame { starter: Seat::User }).unwrap();

        let applied = apply(&mut state, &play("  dog ")).unwrap();

        let Outcome::Played { seat, resolution } = applied.outcome else {
            panic!("expected a play outcome");
        };
        assert_eq!(seat, Seat::User);
        assert_eq!(resolution.consumed.len(), 3);
        assert_eq!(state.hand(Seat::User).to_string(), "XYZ_");
        assert_eq!(state.turn_state(), TurnState::AwaitingDraw(Seat::User));
    }

    #[test]
    fn test_finish_draw_appends_and_passes() {
        let mut state = started(Seat::Opponent);
        apply(&mut state, &play("AT")).unwrap();
        apply(&mut state, &click('E')).unwrap();
        apply(&mut state, &click('S')).unwrap();

        let applied = apply(&mut state, &Action::FinishDraw).unwrap();

        assert_eq!(
            applied.outcome,
            Outcome::TurnPassed {
                seat: Seat::Opponent,
                drawn: vec![letter('E'), letter('S')],
                next: Seat::User,
            }
        );
        assert_eq!(state.hand(Seat::Opponent).to_string(), "?????ES");
        assert_eq!(state.turn_state(), TurnState::AwaitingPlay(Seat::User));
    }

    #[test]
    fn test_edit_hand_rules() {
        let mut state = TrackerState::default();

        let short: HandSlots = std::iter::repeat(Slot::Blank).take(3).collect();
        assert_eq!(
            apply(&mut state, &Action::EditHand { slots: short }),
            Err(TrackerError::HandSize { expected: 7, got: 3 })
        );

        let full: HandSlots = std::iter::repeat(Slot::Letter(letter('E'))).take(7).collect();
        apply(&mut state, &Action::EditHand { slots: full.clone() }).unwrap();
        assert_eq!(state.hand(Seat::User).to_string(), "EEEEEEE");

        apply(&mut state, &Action::StartGame { starter: Seat::User }).unwrap();
        assert_eq!(
            apply(&mut state, &Action::EditHand { slots: full }),
            Err(TrackerError::HandLocked)
        );
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut state = started(Seat::User);
        let before = state.clone();

        assert_eq!(
            apply(&mut state, &Action::Reset { confirmed: false }),
            Err(TrackerError::ResetNotConfirmed)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_events() {
        let mut state = started(Seat::User);
        apply(&mut state, &play("HI")).unwrap();
        apply(&mut state, &click('Q')).unwrap();
        apply(&mut state, &Action::FinishDraw).unwrap();
        apply(&mut state, &play("OX")).unwrap();

        let applied = apply(&mut state, &Action::Reset { confirmed: true }).unwrap();

        assert_eq!(applied.outcome, Outcome::Reset);
        assert_eq!(applied.events.first(), Some(&TrackerEvent::Reset));
        let pool_events = applied
            .events
            .iter()
            .filter(|e| matches!(e, TrackerEvent::PoolUpdated { count: 10, .. }))
            .count();
        assert_eq!(pool_events, 26);

        let hands = applied
            .events
            .iter()
            .find_map(|e| match e {
                TrackerEvent::HandsUpdated { hands } => Some(hands),
                _ => None,
            })
            .expect("reset should publish a hands snapshot");
        assert_eq!(hands[Seat::User].to_string(), "_______");
        assert_eq!(hands[Seat::Opponent].to_string(), "???????");

        assert_eq!(
            applied.events.last(),
            Some(&TrackerEvent::TurnChanged {
                state: TurnState::Setup
            })
        );
        assert_eq!(state.turn_state(), TurnState::Setup);
    }

    #[test]
    fn test_edit_hand_rejects_unknown_markers() {
        let mut state = TrackerState::default();
        let before = state.clone();

        let all_unknown: HandSlots = std::iter::repeat(Slot::Unknown).take(7).collect();
        assert_eq!(
            apply(&mut state, &Action::EditHand { slots: all_unknown }),
            Err(TrackerError::InvalidSlot)
        );

        let mut mixed: HandSlots = std::iter::repeat(Slot::Blank).take(6).collect();
        mixed.push(Slot::Unknown);
        assert_eq!(
            apply(&mut state, &Action::EditHand { slots: mixed }),
            Err(TrackerError::InvalidSlot)
        );

        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_outside_draw_phase_leaves_pool() {
        let mut state = started(Seat::User);

        let err = take_from_pool(&mut state, letter('E'), true).unwrap_err();

        assert!(matches!(err, TrackerError::WrongPhase { .. }));
        assert_eq!(state.pool.count(letter('E')), 10);
        assert!(state.turns.draw_buffer().is_empty());
    }

    #[test]
    fn test_replay_confirmed_reset_clears_history() {
        let actions = vec![
            Action::StartGame { starter: Seat::User },
            Action::Reset { confirmed: true },
        ];

        let state = replay(TrackerConfig::default(), &actions);

        assert!(state.history.is_empty());
        assert_eq!(state, TrackerState::default());
    }

    #[test]
    fn test_record_skips_reset() {
        let mut state = TrackerState::default();

        record(&mut state, None, 1, &Action::Reset { confirmed: true }, &Outcome::Reset);
        assert!(state.history.is_empty());

        let adjusted = Outcome::Adjusted {
            letter: letter('A'),
            remaining: 9,
        };
        record(&mut state, None, 1, &click('A'), &adjusted);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_replay_skips_refused_actions() {
        let actions = vec![
            play("CAT"),
            Action::StartGame { starter: Seat::User },
            click('A'),
            play("CAT"),
            click('A'),
            Action::FinishDraw,
        ];

        let state = replay(TrackerConfig::default(), &actions);

        assert_eq!(state.history.len(), 4);
        assert_eq!(state.turn_state(), TurnState::AwaitingPlay(Seat::Opponent));
        assert_eq!(state.pool.count(letter('A')), 9);
        assert_eq!(state.history[3].seat, Some(Seat::User));
        assert_eq!(state.history[3].turn, 1);
    }
}
