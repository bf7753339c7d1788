//! Terminal front end.
//!
//! The `tile-tracker` binary reads one command per line and prints the
//! board. This module holds the parts that don't touch stdin/stdout so they
//! can be tested: the command parser and the text renderer.

mod command;
mod render;

pub use command::{Command, HELP};
pub use render::{render_board, render_hands, render_pool, render_record, render_tile, GRID_COLUMNS};
