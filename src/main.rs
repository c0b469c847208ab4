//! Terminal Blockfall runner (default binary).
//!
//! Crossterm for input, a framebuffer-based renderer for output, and the high
//! score in `high_score.json` (override with `BLOCKFALL_HIGH_SCORE_PATH`).
//! Set `RUST_LOG` to write a log to `blockfall.log`.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use blockfall::core::{Flow, Session};
use blockfall::input::TerminalInput;
use blockfall::store::JsonFileStore;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

const LOG_FILE: &str = "blockfall.log";

fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logging goes to a file; stderr would tear the alternate screen.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = JsonFileStore::from_env();
    info!("high score file: {}", store.path().display());

    let mut session = Session::new(store, clock_seed());
    let mut input = TerminalInput::with_release_events(term.release_events());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.saturating_duration_since(last_frame);
        last_frame = frame_start;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.view(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let wait = frame.saturating_sub(frame_start.elapsed());
        if session.run_frame(&mut input, wait, elapsed)? == Flow::Exit {
            info!("exiting after {} game(s)", session.games_played());
            return Ok(());
        }
    }
}
