//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog sync CLI
#[derive(Parser, Debug)]
#[command(name = "catalog-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sync pipeline
    Run {
        /// Override the catalog endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Override the storage destination
        /// Supports: gs://bucket/prefix, s3://bucket/prefix, or a local path
        #[arg(short, long)]
        output: Option<String>,

        /// Write local artifacts but skip the upload stage
        #[arg(long)]
        skip_upload: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print the effective configuration as YAML
    ShowConfig,
}
