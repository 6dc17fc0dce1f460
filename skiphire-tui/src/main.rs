//! Terminal UI for skiphire that lets users filter skip options and pick one to hire.

mod app;
mod config;
mod input;
mod ui;

use std::{
    fs::OpenOptions,
    io,
    path::Path,
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use skiphire_core::{
    ports::{CatalogSource, ConfirmHook},
    service::BrowseSession,
    workflow::Confirmation,
};
use skiphire_source_embedded as embedded;
use skiphire_source_file as file;
use skiphire_source_remote::{self as remote, Location};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{CatalogChoice, Cli, Config};
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    config.merge_cli(&cli);

    if let Some(log_file) = &config.log.file {
        init_logging(log_file, &config.log.filter)?;
    }

    // Catalog + session setup
    let source = build_source(&config.catalog_choice()?)?;
    let hook: Arc<dyn ConfirmHook> = Arc::new(|confirmation: &Confirmation| {
        tracing::info!(
            id = %confirmation.option.id,
            next = %confirmation.next_step,
            "handing selection to the next booking step"
        );
    });
    let session = BrowseSession::load(source.as_ref(), hook)
        .await
        .with_context(|| format!("loading catalog from {}", source.describe()))?;

    // App state
    let app = App::new(session, source.describe());

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && input::handle_key_event(key, &mut app) == Action::Quit
        {
            break;
        }
    }

    Ok(())
}

fn build_source(choice: &CatalogChoice) -> Result<Arc<dyn CatalogSource>> {
    let source = match choice {
        CatalogChoice::Embedded => embedded::source(),
        CatalogChoice::File(path) => file::source(path.clone()),
        CatalogChoice::Remote {
            url,
            postcode,
            area,
        } => {
            let client = Client::builder().user_agent("skiphire/0.1").build()?;
            remote::source(client, url.clone(), Location::new(postcode.clone(), area.clone()))
        }
    };
    Ok(source)
}

fn init_logging(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("SKIPHIRE_LOG")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("parsing log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();
    Ok(())
}
