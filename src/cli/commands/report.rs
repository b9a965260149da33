//! Report command: the portfolio performance report block

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::ledger::PerformanceReport;

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Trade log CSV file to analyze
    pub input: PathBuf,

    /// Emit the report as JSON instead of the text block
    #[arg(long)]
    pub json: bool,
}

pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, _data_paths: DataPaths) -> Result<()> {
        let summaries = super::load_position_summaries(&self.args.input)?;
        let report = PerformanceReport::build(&summaries);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("\n📊 Performance Report\n");
        print!("{}", report.render());

        Ok(())
    }
}
