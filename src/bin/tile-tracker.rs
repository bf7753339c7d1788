//! Terminal driver for the tile tracker.
//!
//! Reads one command per line from stdin and prints the board after every
//! change. Logs go to stderr; set `RUST_LOG=tile_tracker=debug` for detail.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tile_tracker::cli::{render_board, render_record, Command, HELP};
use tile_tracker::{Action, EventKind, TrackerConfig, Tracker, TrackerEvent};

#[derive(Parser, Debug)]
#[command(name = "tile-tracker", version, about = "Track the tile bag and both hands of a two-player word game")]
struct Args {
    /// JSON config file ({"start_count": 10, "hand_size": 7})
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tiles per letter in a fresh bag (overrides the config file)
    #[arg(short = 's', long)]
    start_count: Option<u32>,

    /// Slots in each starting hand (overrides the config file)
    #[arg(long)]
    hand_size: Option<usize>,

    /// Don't ask before a bare `reset`; treat it as refused
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn load_config(args: &Args) -> Result<TrackerConfig> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    if let Some(count) = args.start_count {
        config = config.with_start_count(count);
    }
    if let Some(size) = args.hand_size {
        config = config.with_hand_size(size);
    }
    config.validate()?;
    Ok(config)
}

fn confirm_reset(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    print!("Are you sure? This will clear everything. [y/N] ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(matches!(line?.trim().to_ascii_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tile_tracker=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(start_count = config.start_count, hand_size = config.hand_size, "starting tracker");

    let mut tracker = Tracker::new(config);
    tracker.subscribe(&[EventKind::Notice], |event: &TrackerEvent| {
        if let TrackerEvent::Notice { notice } = event {
            println!("[{}] {}", notice.title, notice.message);
        }
    });

    println!("{}", render_board(tracker.state()));
    println!("type `help` for commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = lines.next() {
        let line = line.context("reading stdin")?;
        let commands = match Command::parse(&line) {
            Ok(Some(commands)) => commands,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let mut changed = false;
        for command in commands {
            match command {
                Command::Act(Action::Reset { confirmed: false }) if !args.no_prompt => {
                    let confirmed = confirm_reset(&mut lines)?;
                    changed |= tracker.reset(confirmed).is_ok();
                }
                Command::Act(action) => {
                    // Refusals are printed by the notice observer.
                    changed |= tracker.dispatch(action).is_ok();
                }
                Command::Show => println!("{}", render_board(tracker.state())),
                Command::History => {
                    for record in tracker.history() {
                        println!("{}", render_record(record));
                    }
                }
                Command::Help => println!("{}", HELP),
                Command::Quit => return Ok(()),
            }
        }

        if changed {
            println!("{}", render_board(tracker.state()));
        }
    }

    Ok(())
}
