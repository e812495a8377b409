//! Terminal Tetris runner (default binary).
//!
//! Drives a [`Session`] from the keyboard, advances gravity on a fixed tick,
//! and redraws the handheld screen through the diffing framebuffer renderer.
//! `m` toggles sound and `+`/`-` step the volume on any screen.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use pocket_tetris::core::Session;
use pocket_tetris::input::{handle_key_event, handle_option_key, should_quit};
use pocket_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use pocket_tetris::types::{Options, Palette, TICK_MS};

/// Handheld-style Tetris in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pocket-tetris", version)]
struct Cli {
    /// Colour palette: classic, blackwhite, blue or red
    #[arg(long, default_value = "classic", value_parser = parse_palette)]
    palette: Palette,

    /// Screen scale in percent (50-200)
    #[arg(long, default_value_t = 100)]
    scale: u16,

    /// Music volume in percent (0-100)
    #[arg(long, default_value_t = 80)]
    volume: u8,

    /// Start with sound disabled
    #[arg(long)]
    mute: bool,

    /// Seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u32>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            palette: self.palette,
            scale: self.scale,
            volume: self.volume,
            sound_enabled: !self.mute,
            seed: self.seed,
        }
        .clamped()
    }
}

fn parse_palette(s: &str) -> Result<Palette, String> {
    Palette::from_str(s).ok_or_else(|| {
        let names: Vec<_> = Palette::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown palette `{s}` (expected one of: {})", names.join(", "))
    })
}

fn main() -> ExitCode {
    let options = Cli::parse().options();

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &options));

    // Always try to restore terminal state, even when the game loop failed.
    let restored = term.exit();
    match result.and(restored) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pocket-tetris: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, options: &Options) -> Result<()> {
    let mut session = Session::new(options);
    let view = GameView::from_options(options);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into_with_audio(
                &session.snapshot(),
                session.phase(),
                Some(&session.audio_status()),
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_option_key(key) {
                        dirty |= session.adjust(command);
                    } else if let Some(button) = handle_key_event(key) {
                        dirty |= session.press(button);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            dirty |= session.tick(TICK_MS);
        }
    }
}
