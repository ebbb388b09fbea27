mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use emdex_core::parse_selector;
use emdex_db::Store;

use crate::export::{ensure_supported_version, export_clients, export_sessions, write_document};

#[derive(Parser, Debug)]
#[command(
    name = "emdex",
    about = "Export emWave2 biometric session databases to JSON",
    version,
    author
)]
struct Cli {
    /// Path to the .emdb session database
    database: PathBuf,

    /// What to export
    #[arg(short, long, value_enum, default_value = "session")]
    mode: Mode,

    /// Output document path (default: <mode>.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Session indices to export, e.g. 2,5,7-10 (session mode only)
    #[arg(short, long)]
    select: Option<String>,

    /// Debug-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    User,
    Session,
    Version,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::User => "user",
            Mode::Session => "session",
            Mode::Version => "version",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = Store::open(&cli.database)
        .with_context(|| format!("failed to open database {}", cli.database.display()))?;

    // The version gate applies in every mode, before any row is fetched.
    let version = ensure_supported_version(&store)?;

    if cli.mode == Mode::Version {
        println!("Version: {version}");
        return Ok(());
    }

    let records = match cli.mode {
        Mode::User => export_clients(&store)?,
        Mode::Session => {
            let selection = cli
                .select
                .as_deref()
                .map(parse_selector)
                .transpose()?;
            if let Some(ref selection) = selection {
                tracing::debug!("exporting session indices {selection:?}");
            }
            export_sessions(&store, selection.as_ref())?
        }
        Mode::Version => unreachable!(),
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.json", cli.mode.as_str())));
    write_document(&records, &output)?;

    tracing::info!("wrote {} records to {}", records.len(), output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
