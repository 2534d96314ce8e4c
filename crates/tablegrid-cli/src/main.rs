use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tablegrid_core::TablegridConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "tablegrid",
    about = "Tablegrid: tournament table scheduler",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to tablegrid.toml (defaults apply when the file is absent)
    #[arg(short, long, global = true, default_value = "tablegrid.toml")]
    config: PathBuf,
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Propose the next table: pass number, label, and eligible players
    Next {
        /// Snapshot JSON exported from the tournament store
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Show completed passes per participant and tables per pass
    Progress {
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Check a concrete seating against the snapshot before committing it.
    ///
    /// Exits non-zero and lists every violation when rejected.
    Validate {
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Pass number the table would play; optional when the label carries it
        #[arg(long)]
        pass: Option<u32>,
        /// Table letters (B) or a full label (3B)
        #[arg(long)]
        label: String,
        /// Comma-separated participant ids
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("tablegrid=info".parse()?);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = TablegridConfig::load_or_default(&cli.config)?.scheduler()?;
    tracing::debug!(?config, "resolved scheduler config");

    match cli.command {
        Commands::Next { snapshot, format } => {
            commands::next::next(&snapshot, &config, &format)
        }
        Commands::Progress { snapshot, format } => {
            commands::progress::progress(&snapshot, &config, &format)
        }
        Commands::Validate { snapshot, pass, label, players } => {
            commands::validate::validate(&snapshot, &config, pass, &label, &players)
        }
    }
}
