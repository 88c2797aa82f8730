//! Terminal Blocky runner (default binary).
//!
//! Drives the engine from a fixed-timestep loop: render, poll `crossterm`
//! input until the next tick is due, then step. Moves set the pending
//! direction for exactly one tick; rotations apply immediately.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blocky::core::Game;
use blocky::input::{handle_key_event, should_quit};
use blocky::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocky::types::{Command, Direction};
use blocky::{Config, EventLog};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let mut log = config.log_path.as_deref().map(EventLog::open).transpose()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(log) = log.as_mut() {
        log.flush()?;
    }

    let game = result?;
    println!(
        "[blocky] seed {} | {} ticks | {} pieces | {} lines{}",
        game.seed(),
        game.ticks(),
        game.pieces_spawned(),
        game.lines_cleared(),
        if game.is_game_over() { " | game over" } else { "" }
    );
    if let Some(path) = &config.log_path {
        println!("[blocky] events written to {}", path);
    }
    Ok(())
}

fn new_game(config: &Config, restarts: u64) -> Game {
    let seed = match config.seed {
        Some(seed) => seed.wrapping_add(restarts),
        None => rand::random(),
    };
    Game::with_dimensions(config.board_width, config.board_height, seed)
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    mut log: Option<&mut EventLog>,
) -> Result<Game> {
    let mut restarts = 0;
    let mut game = new_game(config, restarts);
    if let Some(log) = log.as_deref_mut() {
        log.record_step(&game)?;
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    match handle_key_event(key) {
                        Some(Command::Move(direction)) => game.set_direction(direction),
                        Some(Command::Rotate { clockwise }) => {
                            game.rotate_piece(clockwise);
                        }
                        Some(Command::Restart) => {
                            restarts += 1;
                            game = new_game(config, restarts);
                            if let Some(log) = log.as_deref_mut() {
                                log.record_step(&game)?;
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.step();
            game.set_direction(Direction::None);
            if let Some(log) = log.as_deref_mut() {
                log.record_step(&game)?;
            }
        }
    }
}
