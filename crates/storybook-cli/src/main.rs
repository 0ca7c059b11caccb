use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storybook_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "storybook")]
#[command(author, version, about = "A terminal storybook: notes, a letter and pictures, one page at a time")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Story manifest to open (shorthand for `run`)
    story: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the story in the TUI
    Run {
        /// Story manifest (.toml or .json); defaults to `general.story`
        story: Option<PathBuf>,
    },
    /// Validate a story and print its page outline
    Check {
        /// Story manifest (.toml or .json)
        story: PathBuf,
    },
    /// Show the effective configuration
    Config {
        /// Save the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { story }) => {
            init_file_logging(&config)?;
            let path = story_or_configured(story, &config)?;
            commands::run::run(config, &path).await
        }
        None => {
            init_file_logging(&config)?;
            let path = story_or_configured(cli.story, &config)?;
            commands::run::run(config, &path).await
        }
        Some(Commands::Check { story }) => {
            init_stderr_logging(&config);
            commands::check::run(&story)
        }
        Some(Commands::Config { write }) => {
            init_stderr_logging(&config);
            commands::config::run(&config, write)
        }
    }
}

fn story_or_configured(story: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    story.or_else(|| config.story_path()).ok_or_else(|| {
        anyhow!(
            "No story given.\nPass a manifest path:\n  storybook <story.toml>\n\nOr set `story` under [general] in {}",
            AppConfig::config_path().display()
        )
    })
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    )
}

/// The TUI owns the terminal, so logs go to a file in the data directory
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
