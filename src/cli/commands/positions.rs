//! Positions command: the per-symbol position table

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::ledger::display::position_table;
use crate::ledger::PositionStatus;

#[derive(Args, Clone)]
pub struct PositionsArgs {
    /// Trade log CSV file to analyze
    pub input: PathBuf,

    /// Only show positions with this status
    /// (closed, holding, partial-exit, data-missing)
    #[arg(long, value_parser = crate::cli::parse_status)]
    pub status: Option<PositionStatus>,

    /// Emit positions as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub struct PositionsCommand {
    args: PositionsArgs,
}

impl PositionsCommand {
    pub fn new(args: PositionsArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, _data_paths: DataPaths) -> Result<()> {
        let mut summaries = super::load_position_summaries(&self.args.input)?;

        if let Some(status) = self.args.status {
            summaries.retain(|s| s.status == status);
        }

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        println!("\n📒 Positions\n");
        print!("{}", position_table(&summaries));

        Ok(())
    }
}
