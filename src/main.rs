use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{error, info};

use maison_menu::event::{self, AppEvent};
use maison_menu::{ui, App, AppConfig};

#[derive(Parser)]
#[command(name = "maison-menu")]
#[command(author = "Maison Christoffel Team")]
#[command(version = "0.1.0")]
#[command(about = "Browse the menu, order dishes and manage the kitchen", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Splash screen duration in milliseconds
    #[arg(long)]
    splash_ms: Option<u64>,

    /// Start with the house dishes already on the menu
    #[arg(long)]
    seed: bool,

    /// Currency symbol shown before prices
    #[arg(long)]
    currency: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(ms) = cli.splash_ms {
        config.splash_delay_ms = ms;
    }
    if cli.seed {
        config.seed_catalog = true;
    }
    if let Some(symbol) = cli.currency {
        config.currency_symbol = symbol;
    }
    if let Err(errors) = config.validate() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    init_logging(&config.log_path())?;
    info!("Starting Maison Menu");

    let terminal = ratatui::init();
    let result = run_app(terminal, App::new(config)).await;
    ratatui::restore();

    if let Err(e) = &result {
        error!("Application error: {:#}", e);
    }
    info!("Maison Menu stopped");
    result
}

/// Log to a file; stdout belongs to the terminal UI
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log dir: {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maison_menu=info".parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let tick_rate = app.config.tick_rate();
    let input_tx = tx.clone();
    let reader = tokio::task::spawn_blocking(move || event::read_input(input_tx, tick_rate));

    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    while !app.should_quit {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw frame")?;

        match rx.recv().await {
            Some(AppEvent::Input(evt)) => event::handle_event(&mut app, evt),
            Some(AppEvent::Tick) => app.on_tick(Instant::now()),
            None => break,
        }
    }

    app.quit();
    ticker.abort();
    // Closing the channel stops the input reader at its next poll
    drop(rx);
    reader.await.context("Input reader panicked")?;
    Ok(())
}
