// src/main.rs

use clap::Parser;
use color_eyre::config::HookBuilder;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod config;
mod core;
mod input;
mod logging;
mod ui;

use app::App;
use config::Config;
use crate::core::errors::SubmitError;
use crate::core::models::{AnalysisResult, SelectedFile};
use crate::core::uploader::UploadClient;
use input::Action;

type Outcome = Result<AnalysisResult, SubmitError>;

const IDLE_POLL: Duration = Duration::from_millis(100);
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    install_hooks()?;
    let config = Config::parse();
    let log_path = logging::initialize_logging(config.log_level.as_deref())?;
    let upload_url = config.upload_url().wrap_err("invalid server URL")?;
    let client = UploadClient::new(upload_url).wrap_err("failed to build HTTP client")?;
    info!(endpoint = %client.endpoint(), log = %log_path.display(), "Starting pulse-scope.");

    let mut app = App::new();
    if let Some(path) = &config.file {
        input::select_path(&mut app, path).await;
    }

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app, &client).await;

    // --- Restore Terminal ---
    restore_terminal()?;
    result
}

/// Installs color-eyre's reports with a panic hook that gives the terminal
/// back before the report is printed.
fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));
    Ok(())
}

fn restore_terminal() -> std::io::Result<()> {
    leave_screen(&mut stdout())?;
    disable_raw_mode()
}

fn leave_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(LeaveAlternateScreen)?;
    out.execute(DisableBracketedPaste)?;
    Ok(())
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, client: &UploadClient) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        let timeout = if app.is_animating(Instant::now()) { FRAME_INTERVAL } else { IDLE_POLL };
        if event::poll(timeout)? {
            if let Action::Submit(file) = input::handle_event(app, event::read()?).await {
                spawn_submission(client, &tx, file);
            }
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish_submission(outcome);
        }
        app.on_tick();
    }
    info!("Shutting down.");
    Ok(())
}

/// Sends `file` in the background; the outcome arrives on `tx`.
fn spawn_submission(client: &UploadClient, tx: &mpsc::Sender<Outcome>, file: SelectedFile) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = client.submit(&file).await;
        let _ = tx.send(outcome).await;
    });
}
