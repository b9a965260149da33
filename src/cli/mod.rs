//! CLI module for tradelog
//!
//! This module provides the command-line interface for the trade-log
//! analyzer. It uses clap for argument parsing and provides a structured
//! command pattern for all operations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod args;
pub mod commands;

pub use args::parse_status;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{self, LogMode, LoggingConfig};

// Import all command args and commands
use commands::analyze::{AnalyzeArgs, AnalyzeCommand};
use commands::positions::{PositionsArgs, PositionsCommand};
use commands::report::{ReportArgs, ReportCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "tradelog")]
#[command(version)]
#[command(about = "Trade-log position and performance analyzer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a trade log: position table plus performance report
    Analyze(AnalyzeArgs),

    /// Show the per-symbol position table
    Positions(PositionsArgs),

    /// Show the portfolio performance report
    Report(ReportArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Whether the selected command writes machine-readable output to
    /// stdout; logs then go to the session file only
    fn wants_clean_stdout(&self) -> bool {
        match &self.command {
            Commands::Analyze(args) => args.json,
            Commands::Positions(args) => args.json,
            Commands::Report(args) => args.json,
            Commands::Version(_) => false,
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        let mode = if self.wants_clean_stdout() {
            LogMode::FileOnly
        } else {
            LogMode::ConsoleAndFile
        };
        logging::init_logging(LoggingConfig::new(mode, data_paths.clone(), self.verbose > 0))?;

        match self.command {
            Commands::Analyze(args) => AnalyzeCommand::new(args).execute(data_paths),
            Commands::Positions(args) => PositionsCommand::new(args).execute(data_paths),
            Commands::Report(args) => ReportCommand::new(args).execute(data_paths),
            Commands::Version(args) => VersionCommand::new(args).execute(data_paths),
        }
    }
}
