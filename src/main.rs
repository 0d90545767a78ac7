//! Developer activity dashboard
//!
//! A terminal dashboard that animates daily and monthly goals for commits,
//! issues and lines of code. The numbers are mock data.
//! Run with: devstats [--fast|--eased] [--log <FILE>]

mod app;
mod cli;
mod constants;
mod event;
mod metrics;
mod scheduler;
mod ui;
mod variant;

use std::env;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Transition};
use crate::cli::Command;
use crate::constants::FRAME_INTERVAL;
use crate::event::EventHandler;
use crate::scheduler::{wait_for, TickScheduler};
use crate::variant::Variant;

/// Entry point for the application.
///
/// Failures are reported as a single line on stdout once the terminal has
/// been restored.
#[tokio::main]
async fn main() -> ExitCode {
    match run(env::args().skip(1)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: impl Iterator<Item = String>) -> Result<()> {
    let options = match cli::parse_args(args)? {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(options) => options,
    };

    init_logging(options.log_file.as_deref())?;
    info!(variant = %options.variant, "starting dashboard");

    // Initialize the terminal
    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;

    let result = run_app(&mut terminal, options.variant).await;

    // Restore the terminal to its original state
    let restored = ratatui::try_restore().context("Failed to restore terminal");

    result.and(restored)
}

/// Main application loop.
///
/// Each pass draws the dashboard, then waits for whichever comes first:
/// 1. the pending tick, which advances the counters and re-arms the timer
/// 2. an animation frame, while an eased bar is still moving
/// 3. a terminal event (key press or resize)
async fn run_app(terminal: &mut ratatui::DefaultTerminal, variant: Variant) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(variant, size.width, size.height, Local::now());

    let mut events = EventHandler::new();
    let mut scheduler = TickScheduler::start(variant.tick_interval(), Instant::now());
    info!(
        period_ms = scheduler.period().as_millis() as u64,
        "tick scheduler armed"
    );

    while app.is_running() {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        tokio::select! {
            () = wait_for(scheduler.deadline()) => {
                app.on_tick(Local::now());
                scheduler.rearm(Instant::now());
            }
            () = tokio::time::sleep(FRAME_INTERVAL), if app.is_animating() => {
                app.on_frame();
            }
            action = events.next() => {
                if let Some(action) = action? {
                    match app.handle_action(action) {
                        Transition::Continue => {}
                        Transition::RestartTimer => scheduler.rearm(Instant::now()),
                        Transition::Quit => scheduler.stop(),
                    }
                }
            }
        }
    }

    Ok(())
}

/// Sets up tracing.
///
/// The terminal belongs to the dashboard, so events are discarded unless a
/// log file was requested.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }

    Ok(())
}
