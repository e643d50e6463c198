use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use xtm_achievements::config::Config;

mod cli;

use cli::list::ListFilter;
use cli::record::RecordKind;

#[derive(Parser)]
#[command(name = "xtm-achievements")]
#[command(about = "Mining stats, streaks and achievements for the XTM miner")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.xtm-achievements/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show achievement progress and lifetime stats
    Status,

    /// List achievements with their progress
    List {
        /// Only show this category (mining, earnings, time, social, special)
        #[arg(long)]
        category: Option<String>,

        /// Only show unlocked achievements
        #[arg(long, conflicts_with = "locked")]
        unlocked: bool,

        /// Only show locked achievements
        #[arg(long)]
        locked: bool,
    },

    /// Show daily stats for recent days
    History {
        /// Number of days to show, ending today
        #[arg(long, default_value_t = 10)]
        days: u32,

        /// Show the most recent days with activity instead of a calendar window
        #[arg(long)]
        recent: bool,
    },

    /// Record a single stats update
    Record {
        #[command(subcommand)]
        kind: RecordKind,
    },

    /// Unlock an achievement by id (e.g. performance_mode)
    Unlock { id: String },

    /// Feed newline-delimited JSON mining events through the tracker
    Feed {
        /// Read events from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);
    let config = match &cli.command {
        // Init must not fail on a broken file it is about to replace
        Some(Commands::Init { .. }) => Config::default(),
        _ => Config::load_or_default(Some(&config_path))?,
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Status) | None => {
            cli::status::status_command(&config).await?;
        }
        Some(Commands::List {
            category,
            unlocked,
            locked,
        }) => {
            let filter = match (unlocked, locked) {
                (true, _) => ListFilter::Unlocked,
                (_, true) => ListFilter::Locked,
                _ => ListFilter::All,
            };
            cli::list::list_command(&config, category, filter).await?;
        }
        Some(Commands::History { days, recent }) => {
            cli::history::history_command(&config, days, recent).await?;
        }
        Some(Commands::Record { kind }) => {
            cli::record::record_command(&config, kind).await?;
        }
        Some(Commands::Unlock { id }) => {
            cli::unlock::unlock_command(&config, &id).await?;
        }
        Some(Commands::Feed { file }) => {
            cli::feed::feed_command(&config, file.as_deref()).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force).await?;
        }
    }

    Ok(())
}
