//! Terminal 3D snake runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a small
//! buffered terminal renderer; the simulation itself lives in the core crate
//! and is driven at a fixed tick cadence.

mod config;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use config::Options;
use tui_snake3d::core::PlayField;
use tui_snake3d::input::{handle_key_event, should_quit};
use tui_snake3d::term::{GameView, TerminalRenderer};
use tui_snake3d::types::GameCommand;

fn main() -> Result<()> {
    let options = Options::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: &Options) -> Result<()> {
    let mut field = new_field(options)?;
    let view = GameView::new().with_debug(options.debug);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(options.tick_ms as u64);

    loop {
        // Render.
        term.draw(&view.compose(&field))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameCommand::Steer(direction)) => field.set_direction(direction),
                        Some(GameCommand::Face(side)) => field.set_side(side),
                        Some(GameCommand::Restart) => field = new_field(options)?,
                        None => {}
                    }
                }
            }
        }

        // Tick. After game over this is a no-op and the banner keeps showing
        // until the player restarts or quits.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            field.update();
        }
    }
}

fn new_field(options: &Options) -> Result<PlayField> {
    PlayField::new(options.dimension, options.seed()).context("invalid play field dimension")
}
