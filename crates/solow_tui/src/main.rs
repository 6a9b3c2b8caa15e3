//! Solow explorer binary: terminal session management and the event loop.
//!
//! ```text
//! main() -> TerminalSession::new() -> run() -> App + draw()
//!                                       |
//!                                       v
//!                  pump input -> Session recompute -> redraw
//! ```
//!
//! Nothing is redrawn until a key actually changes the model (or the terminal
//! is resized); each accepted change recomputes the full snapshot first.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{stdout, Stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use solow_core::{Parameters, Session};
use solow_tui::{draw, pump_events, App, Palette};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Writing to stdout/stderr would corrupt the chart; no file means no logs.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.solow/logs/solow.log
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".solow").join("logs").join("solow.log"));
    }

    // Fallback: ./.solow/logs/solow.log
    candidates.push(PathBuf::from(".solow").join("logs").join("solow.log"));

    candidates
}

fn palette_from_env() -> Palette {
    match env::var("SOLOW_THEME") {
        Ok(value) if value.eq_ignore_ascii_case("high-contrast") => Palette::high_contrast(),
        _ => Palette::standard(),
    }
}

/// RAII wrapper for terminal state; raw mode and the alternate screen are
/// restored on drop, including during unwinding.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, app))?;
        }
        dirty = pump_events(app, INPUT_POLL_TIMEOUT)?;
        if app.should_quit() {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let session = Session::new(Parameters::default())?;
    let mut app = App::new(session, palette_from_env());

    let result = {
        let mut terminal = TerminalSession::new()?;
        run(&mut terminal.terminal, &mut app)
    };

    let params = app.session().params();
    info!(
        s = params.s,
        n = params.n,
        d = params.d,
        alpha = params.alpha,
        "Explorer closed"
    );
    result
}
