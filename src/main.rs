//! Folio Contact - Terminal client for a portfolio contact form
//!
//! A Ratatui-based TUI for sending project inquiries to the portfolio's
//! contact-intake backend and triaging the ones already received.

mod app;
mod config;
mod intake;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{FolioConfig, Settings};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
const LOG_FILE: &str = "folio-contact.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_contact=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    // Resolve configuration before taking over the terminal so errors stay readable
    if let Err(e) = FolioConfig::init_if_missing() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = FolioConfig::load()?;
    let settings = Settings::resolve(&config)?;
    tracing::info!(backend = %settings.backend_url, "starting folio-contact");

    let mut app = App::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Append to a log file in the data directory; stderr would tear the TUI
/// but is the only option when no data directory exists.
fn log_writer() -> BoxMakeWriter {
    match open_log_file() {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

fn open_log_file() -> Option<File> {
    let dir = FolioConfig::data_dir()?;
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // A queued submission is sent after the "Sending..." frame is on screen
        if app.has_pending_submission() {
            app.process_pending_submit().await;
            continue;
        }

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }

        app.state.expire_toast();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
