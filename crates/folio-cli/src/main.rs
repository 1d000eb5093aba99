use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio with a scroll-driven project showcase")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Go straight to the page without the intro animation
        #[arg(long)]
        skip_intro: bool,
    },
    /// List projects with their showcase checkpoints
    Projects {
        /// Print the portfolio as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default config and a sample portfolio
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Validate the config and portfolio files
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run { skip_intro }) => commands::run::run(config, skip_intro),
        None => commands::run::run(config, false),
        Some(Commands::Projects { json }) => commands::projects::run(&config, json),
        Some(Commands::Init { force }) => commands::init::run(&config, force),
        Some(Commands::Check) => commands::check::run(&config),
    }
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if tui {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
