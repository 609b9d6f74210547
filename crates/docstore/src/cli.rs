//! Process entry: argument parsing, logging, config and store bootstrap,
//! then serving until the listener fails. Every start-up failure is fatal.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use docstore::{app, AppState};
use docstoreapp::config::{ServerConfig, DEFAULT_CONFIG_FILENAME};
use docstoreapp::DocumentStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "docstore", version, about = "Serve a directory as a small document store over HTTP")]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match serve(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn serve(cli: &Cli) -> anyhow::Result<()> {
    let config = ServerConfig::load(&cli.config).context("Error reading config")?;

    let store = DocumentStore::open(&config.store_dir).context("Error opening store")?;
    tracing::info!(dir = %config.store_dir.display(), "Store ready");

    let state = AppState::new(store).with_max_payload_bytes(config.max_payload_bytes);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Error binding {addr}"))?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server stopped")?;
    Ok(())
}
