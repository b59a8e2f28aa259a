//! palm-export - Palmtracker module export tool
//!
//! Rebuilds standalone Impulse Tracker modules (.it) from the Palm OS
//! project databases (.pdb) the tracker syncs to the desktop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use modules from library
use palm_export::{extract, info};

#[derive(Parser)]
#[command(name = "palm-export")]
#[command(about = "Palmtracker module export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an IT module from a project database
    Extract {
        /// Input .pdb file
        input: PathBuf,

        /// Output .it file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of pattern records (default: the project header's
        /// pattern count)
        #[arg(long)]
        pattern_records: Option<u16>,
    },

    /// Show database and project details without extracting
    Info {
        /// Input .pdb file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            pattern_records,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("it"));
            tracing::info!("Extracting {:?} -> {:?}", input, output);
            extract::extract_file(&input, &output, pattern_records)?;
            tracing::info!("Done!");
        }

        Commands::Info { input } => {
            info::print_info(&input)?;
        }
    }

    Ok(())
}
