//! Terminal Elevatris runner (default binary).
//!
//! Polls crossterm for keys, feeds wall-clock time to the session, and
//! redraws every frame.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use elevatris::cli::{apply_args, USAGE};
use elevatris::engine::{EventJournal, Session, SessionConfig};
use elevatris::input::{handle_key_event, should_quit};
use elevatris::term::{FrameBuffer, GameView, TerminalRenderer};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = SessionConfig::from_env();
    if !apply_args(&args, &mut config)? {
        println!("{}", USAGE);
        return Ok(());
    }

    let journal = match config.log_path.as_deref() {
        Some(path) => EventJournal::open(path)
            .with_context(|| format!("failed to open log file {}", path))?,
        None => EventJournal::disabled(),
    };
    let mut session = Session::with_journal(config, journal);
    session.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.flush();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.reset(w, h);
        GameView::centered(w, h).render(session, &mut fb);
        term.draw(&fb)?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Carry the sub-millisecond remainder into the next frame.
        let elapsed = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed as u64);
        session.advance(elapsed);
    }
}
