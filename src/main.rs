use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deck::app::{App, TerminalHost};
use deck::config::Config;
use deck::deck::open_default_deck;
use deck::error::{AppError, AppResult};
use deck::export::export_slides;
use deck::nav::NavigationState;

#[derive(Debug, Parser)]
#[command(name = "deck", version, about = "Terminal slide deck presenter")]
struct Cli {
    /// Markdown deck, slides separated by `---` lines
    #[arg(value_name = "DECK")]
    deck: PathBuf,
    /// Config file (defaults to $DECK_CONFIG_PATH or the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print the deck summary as JSON and exit
    #[arg(long)]
    export: bool,
    /// Append logs to this file; logging is off without it
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(path) = cli.log_file.as_ref().or(config.log.path.as_ref()) {
        init_tracing(path)?;
    }

    let slides = open_default_deck(&cli.deck)?;
    if cli.export {
        let state = NavigationState::new(slides.slide_count());
        let export = export_slides(&state, slides.as_ref(), Utc::now());
        let json = serde_json::to_string_pretty(&export)
            .map_err(|err| AppError::unsupported(format!("failed to encode export: {err}")))?;
        println!("{json}");
        return Ok(());
    }

    let print_path = TerminalHost::print_path_for(&cli.deck, config.print.output_dir.as_deref());
    let host = TerminalHost::new(print_path);
    let mut app = App::new(slides, config, Box::new(host), Instant::now());
    app.run().await
}

/// Logs go to a file because stdout belongs to the terminal UI. `RUST_LOG`
/// overrides the default `info` level.
fn init_tracing(path: &Path) -> AppResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| AppError::unsupported(format!("failed to install logger: {err}")))
}
