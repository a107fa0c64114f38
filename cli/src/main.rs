//! MBTI Snap CLI - Binary entry point and terminal session management.
//!
//! The CLI bridges [`snap_engine`] (quiz state) and [`snap_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup.
//!
//! # Event Loop
//!
//! A fixed 8ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`snap_tui::InputPump`])
//! 3. Advance animations and status expiry (`app.tick()`)
//! 4. Render frame

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tokio::time::{MissedTickBehavior, interval};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use snap_engine::{App, AppSettings, SnapConfig};
use snap_tui::{InputPump, SystemClipboard, draw, handle_events};

const LOG_FILE_NAME: &str = "mbti-snap.log";

/// Take a twelve-question personality quiz in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mbti-snap", version, about)]
struct Cli {
    /// Open the result page for a type code, as a shared link would.
    #[arg(long, value_name = "CODE")]
    result: Option<String>,

    /// Draw with ASCII glyphs only.
    #[arg(long)]
    ascii: bool,
}

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

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Never log to stdout/stderr while the TUI owns the terminal.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
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

    // Primary: ~/.mbti-snap/logs/mbti-snap.log
    if let Some(config_path) = SnapConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join(LOG_FILE_NAME));
    }

    // Fallback: ./.mbti-snap/logs/mbti-snap.log
    candidates.push(PathBuf::from(".mbti-snap").join("logs").join(LOG_FILE_NAME));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match SnapConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            None
        }
    };

    let mut settings = AppSettings::from_config(config.as_ref());
    if cli.ascii {
        settings.ui_options.ascii_only = true;
    }
    let mut app = App::with_settings(settings)?;
    if let Some(code) = cli.result.as_deref() {
        app.open_result(code);
    }

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = &result {
        tracing::error!("Exited with error: {err:#}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut clipboard = SystemClipboard;
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input, &mut clipboard) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
