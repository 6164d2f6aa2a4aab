use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use hestia::catalog::codec;
use hestia::config::Config;
use hestia::config::LogLevel;
use hestia::console::StdConsole;
use hestia::menu;
use hestia::store;

const DEFAULT_CONFIG_PATH: &str = "hestia.toml";

/// Console registry and controller for simulated smart-home devices.
#[derive(Debug, Parser)]
#[command(name = "hestia", version, about)]
struct Args {
    /// Path to the configuration file (must exist when given explicitly)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the seed data directory from the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log level from the config
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // An explicitly-given config path must exist; the default path falls
    // back to built-in defaults when absent.
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Config::from_file(default)?
            } else {
                Config::default()
            }
        }
    };

    let level = args.log_level.unwrap_or(config.logging.level);
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .init();

    tracing::info!("hestia starting");

    let source_dir = args
        .data_dir
        .unwrap_or_else(|| config.storage.source_dir.clone());

    // A failed bootstrap is reported but does not stop startup; the load
    // below then fails if no working copy is left from a previous session.
    let working_path = match store::stage(
        &source_dir,
        &config.storage.filename,
        &config.storage.working_dir,
    ) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{}", e);
            config.storage.working_dir.join(&config.storage.filename)
        }
    };

    let summary = codec::load(&working_path)
        .with_context(|| format!("failed to load devices from {}", working_path.display()))?;
    if summary.skipped > 0 {
        tracing::warn!(
            "skipped {} record(s) with unrecognized device types",
            summary.skipped
        );
    }
    tracing::info!(
        "loaded {} device(s) from {}",
        summary.catalog.len(),
        working_path.display()
    );

    let mut catalog = summary.catalog;
    let mut console = StdConsole;
    menu::main_menu(&mut console, &mut catalog)?;

    codec::save(&working_path, &catalog)
        .with_context(|| format!("failed to save devices to {}", working_path.display()))?;
    tracing::info!(
        "saved {} device(s) to {}",
        catalog.len(),
        working_path.display()
    );

    Ok(())
}
