//! qrfolio CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`qrfolio_engine`] (application state) and [`qrfolio_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> Args::parse() -> LaunchOptions::resolve() -> App
//!             |                                          |
//!             | --print                                  v
//!             v                          TerminalSession::new() -> run_app()
//!        render_plain() -> stdout
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`qrfolio_tui::InputPump`])
//! 3. Advance animations (`app.tick()`)
//! 4. Render frame

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use qrfolio_engine::{App, LaunchOptions, PortfolioConfig, ProcessId, ThemeMode, theme_from_env};
use qrfolio_tui::{InputPump, draw, handle_events, render_plain};

const FRAME_DURATION: Duration = Duration::from_millis(8);
/// Width used by `--print` when stdout is not a terminal.
const DEFAULT_PRINT_WIDTH: u16 = 80;

/// Terminal portfolio for the QR product-history tracking project.
#[derive(Debug, Parser)]
#[command(name = "qrfolio", version, about)]
struct Args {
    /// Initial color theme (overrides QRFOLIO_THEME and the config file).
    #[arg(long, value_name = "dark|light")]
    theme: Option<ThemeMode>,

    /// Process tab selected at startup.
    #[arg(long, value_name = "production|qc|qrscan|feedback")]
    process: Option<ProcessId>,

    /// Print the page as plain text and exit.
    #[arg(long)]
    print: bool,

    /// Wrap width for --print.
    #[arg(long, value_name = "N", requires = "print", value_parser = clap::value_parser!(u16).range(20..))]
    width: Option<u16>,
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

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
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

    // Primary: ~/.qrfolio/logs/qrfolio.log
    if let Some(config_path) = PortfolioConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("qrfolio.log"));
    }

    // Fallback: ./.qrfolio/logs/qrfolio.log
    candidates.push(PathBuf::from(".qrfolio").join("logs").join("qrfolio.log"));

    candidates
}

fn launch_options(args: &Args) -> LaunchOptions {
    let config = match PortfolioConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config file: {e}");
            None
        }
    };
    let mut options = LaunchOptions::resolve(args.theme, theme_from_env(), config.as_ref());
    if let Some(process) = args.process {
        options.process = process;
    }
    options
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored on drop, so the terminal
/// stays usable after panics or early returns.
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
    let args = Args::parse();
    init_tracing();

    let mut app = App::new(launch_options(&args));

    if args.print {
        let width = args
            .width
            .or_else(|| terminal_size().ok().map(|(w, _)| w))
            .unwrap_or(DEFAULT_PRINT_WIDTH);
        let mut out = stdout().lock();
        out.write_all(render_plain(&app, width).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = &result {
        tracing::error!("Exiting on error: {err:?}");
    }
    result
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        match handle_events(app, &mut input) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
