//! Plain-text board rendering.

use std::fmt::Write;

use crate::core::{ActionRecord, Seat, TrackerState};
use crate::pool::TileView;

/// Tiles per row in the bag grid.
pub const GRID_COLUMNS: usize = 9;

/// Render one bag tile as `A:10`, or `a:--` once exhausted.
#[must_use]
pub fn render_tile(tile: TileView) -> String {
    if tile.exhausted {
        format!("{}:--", tile.letter.as_char().to_ascii_lowercase())
    } else {
        format!("{}:{:<2}", tile.letter, tile.count)
    }
}

/// Render the bag as a grid, dimmed with brackets while it is locked.
#[must_use]
pub fn render_pool(state: &TrackerState) -> String {
    let locked = state.turn_state().bag_locked();
    let tiles: Vec<TileView> = state.pool.tiles().collect();

    let mut out = String::new();
    for row in tiles.chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row.iter().map(|&t| render_tile(t)).collect();
        let line = cells.join("  ");
        if locked {
            let _ = writeln!(out, "[{}]", line);
        } else {
            let _ = writeln!(out, " {}", line);
        }
    }
    out
}

/// Render both hands, one per line.
#[must_use]
pub fn render_hands(state: &TrackerState) -> String {
    let mut out = String::new();
    for seat in Seat::ALL {
        let label = match seat {
            Seat::User => "MY HAND",
            Seat::Opponent => "OPPONENT HAND",
        };
        let slots: Vec<String> = state.hand(seat).slots().iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "{:<14} {}", label, slots.join(" "));
    }
    out
}

/// Render pool, hands and status line.
#[must_use]
pub fn render_board(state: &TrackerState) -> String {
    let mut out = render_pool(state);
    out.push('\n');
    out.push_str(&render_hands(state));
    out.push('\n');
    out.push_str(&state.turns.status());
    out.push('\n');
    out
}

/// Render one history entry.
#[must_use]
pub fn render_record(record: &ActionRecord) -> String {
    let who = record
        .seat
        .map_or_else(|| "setup".to_string(), |seat| seat.to_string());
    format!(
        "#{:<3} turn {:<3} {:<9} {:?}",
        record.sequence, record.turn, who, record.action
    )
}
