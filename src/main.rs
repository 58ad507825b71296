//! Terminal 2048 runner (default binary).
//!
//! Blocking event loop: draw the current snapshot, wait for one key, feed it
//! to the session. Rendering goes through the framebuffer diff renderer.

mod cli;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_2048::config::Config;
use tui_2048::core::{seeded, Game, TileSource};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides()).context("loading configuration")?;

    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        width = config.width,
        height = config.height,
        target = config.target,
        seed,
        "starting"
    );
    let mut game = Game::new(config.settings(), seeded(seed))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route tracing output to `path`; the terminal itself belongs to the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<S: TileSource>(term: &mut TerminalRenderer, game: &mut Game<S>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(moves = game.moves(), status = game.status().as_str(), "quit");
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(action) => game.apply_action(action),
                    None => game.apply_unmapped(),
                };
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
