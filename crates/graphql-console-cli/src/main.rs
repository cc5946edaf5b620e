mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-console")]
#[command(about = "Locate GraphQL definitions under a cursor position", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to GraphQL config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Schema variant (project name in multi-project configs)
    #[arg(short, long)]
    project: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the definition under a cursor position
    Inspect {
        /// GraphQL document to inspect
        file: PathBuf,

        /// Cursor line (0-indexed)
        #[arg(short, long)]
        line: usize,

        /// Cursor column (0-indexed)
        #[arg(short = 'C', long)]
        column: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List every definition of a document with its explorer selector
    Outline {
        /// GraphQL document to list
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

fn main() -> anyhow::Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let selectors = commands::load_selectors(cli.config, cli.project.as_deref())?;

    match cli.command {
        Commands::Inspect {
            file,
            line,
            column,
            format,
        } => {
            commands::inspect::run(&file, line, column, selectors, format)?;
        }
        Commands::Outline { file, format } => {
            commands::outline::run(&file, &selectors, format)?;
        }
    }

    Ok(())
}
