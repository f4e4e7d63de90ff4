use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use catalog_core::CatalogEditor;
use clap::Parser;
use shared::seed::mock_products;
use storage::{load_seed_file, MemoryStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod shell;

use config::load_settings;
use shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "catalog-admin", about = "Edit the product catalog from a terminal")]
struct Cli {
    /// Settings file (defaults to ./catalog.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON array of listings to start from instead of the built-in list.
    #[arg(long)]
    seed: Option<PathBuf>,
    /// Label language: en or ar.
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref());
    settings.apply_cli(cli.seed, cli.locale.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();
    for note in &settings.ignored {
        warn!("{note}");
    }

    let seed = match &settings.seed_path {
        Some(path) => load_seed_file(path)
            .with_context(|| format!("failed to seed catalog from '{}'", path.display()))?,
        None => mock_products(),
    };
    info!(records = seed.len(), locale = %settings.locale, "catalog admin starting");

    let editor = CatalogEditor::new(MemoryStore::from_seed(seed)).with_locale(settings.locale);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(editor, stdin.lock(), stdout.lock()).run()
}
