//! Advisor CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`advisor_engine`] (application state) and [`advisor_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//!        \-> --print -> run_headless() -> stdout
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`advisor_tui::InputPump`])
//! 3. Advance application state (`app.tick()`), which collects a finished request
//! 4. Render frame

use anyhow::{Result, bail};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
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

use advisor_engine::{AdvisorConfig, App, SubmissionPhase, SubmitOutcome};
use advisor_tui::{InputPump, draw, handle_events};

#[derive(Debug, Parser)]
#[command(name = "advisor", version)]
#[command(about = "Collects a business profile and shows recommended sustainability certifications")]
struct Cli {
    /// Submit the saved profile from ~/.advisor/config.toml and print the results
    #[arg(short, long)]
    print: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

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

    // Without a log file, prefer no logs over corrupting the TUI.
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

    // Primary: ~/.advisor/logs/advisor.log
    if let Some(config_path) = AdvisorConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("advisor.log"));
    }

    // Fallback: ./.advisor/logs/advisor.log
    candidates.push(PathBuf::from(".advisor").join("logs").join("advisor.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, bracketed paste, and the alternate screen. On drop, all
/// terminal state is restored, even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = match AdvisorConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using defaults: {err}");
            if cli.print {
                eprintln!("Warning: {err}");
            }
            None
        }
    };
    let mut app = App::new(config.as_ref())?;

    if cli.print {
        return run_headless(&mut app).await;
    }

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Submit once and print the results as plain text.
async fn run_headless(app: &mut App) -> Result<()> {
    if let Some(status) = app.status() {
        eprintln!("{status}");
    }

    match app.submit() {
        SubmitOutcome::Blocked => {
            if let Some(error) = app.form().email_error() {
                eprintln!("{error}");
            }
            bail!("{}", app.result().message);
        }
        SubmitOutcome::Started | SubmitOutcome::AlreadySubmitting => {}
    }
    app.finish_submission().await;

    print!("{}", app.results_view());
    if app.submission_phase() == SubmissionPhase::Failed {
        bail!("submission failed");
    }
    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
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
