pub mod animation;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod report;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    fs::File,
    io::{self, Stdout},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::settings::load_runtime_settings;
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SKYSHADE_LOG";

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let (settings, settings_path) = load_runtime_settings(&cli, true);

    if cli.one_shot {
        init_stderr_tracing()?;
        return report::print_one_shot(&cli, &settings).await;
    }

    // the terminal owns stdout and stderr while the preview is up
    if let Some(path) = cli.log_file.as_deref() {
        init_file_tracing(path)?;
    }
    info!(fps = settings.fps, dpr = settings.dpr, "starting preview");

    let mut terminal = setup_terminal()?;
    let app = AppState::new(&cli, settings, settings_path);
    let result = run_inner(&mut terminal, cli, app).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: Cli,
    mut app: AppState,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    info!(frames = app.frame_tick, "preview closed");
    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")
}

fn init_file_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
