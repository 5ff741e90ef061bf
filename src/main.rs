//! TaskMate - terminal to-do list manager
//!
//! CLI entry point: launches the TUI or prints the loaded list.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use taskmate::cli::{Cli, Command, OutputFormat};
use taskmate::config::Config;
use taskmate::store::TaskStore;
use taskmate::tui;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskmate")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to a log file, never stdout/stderr - the TUI owns the terminal
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("taskmate.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // CLI flag wins over config for the tasks file
    let tasks_file = cli.tasks.clone().unwrap_or_else(|| config.tasks.file.clone());
    info!("Tasks file: {}", tasks_file.display());

    // One-shot initial load; a missing or malformed file means an empty list
    let mut store = TaskStore::new();
    store.load_initial(&tasks_file);

    match cli.command {
        None | Some(Command::Tui) => cmd_tui(&config, store).await,
        Some(Command::List {
            search,
            finished_only,
            format,
        }) => cmd_list(&store, &search, finished_only, format),
    }
}

/// Launch the TUI
async fn cmd_tui(config: &Config, store: TaskStore) -> Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    tui::run(store, config.ui.show_finished, tick_rate).await
}

/// Print the loaded list after applying the store's filters
fn cmd_list(store: &TaskStore, search: &str, finished_only: bool, format: OutputFormat) -> Result<()> {
    let tasks = store.visible_tasks(search, finished_only);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        OutputFormat::Text => {
            if tasks.is_empty() {
                println!("You have no tasks");
                return Ok(());
            }

            for task in tasks {
                let marker = if task.is_completed { "[x]" } else { "[ ]" };
                println!("{} {}  ({})", marker, task.title, task.created_at.format("%Y-%m-%d"));
            }
        }
    }

    Ok(())
}
