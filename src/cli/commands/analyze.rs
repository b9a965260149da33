//! Analyze command: full position table plus performance report

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::data_paths::DataPaths;
use crate::ledger::display::position_table;
use crate::ledger::{PerformanceReport, PositionStatus, PositionSummary};

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Trade log CSV file to analyze
    pub input: PathBuf,

    /// Emit positions and report as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Export the position table to CSV
    #[arg(long)]
    pub export: bool,

    /// CSV export filename (written under the data reports directory)
    #[arg(long, default_value = "positions.csv")]
    pub output: String,
}

pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    positions: &'a [PositionSummary],
    report: &'a PerformanceReport,
}

impl AnalyzeCommand {
    pub fn new(args: AnalyzeArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let summaries = super::load_position_summaries(&self.args.input)?;
        let report = PerformanceReport::build(&summaries);

        if self.args.json {
            let output = AnalysisOutput {
                positions: &summaries,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("\n📒 Trade Log Analysis\n");
        print!("{}", position_table(&summaries));

        println!("\n📊 Performance Report\n");
        print!("{}", report.render());

        if self.args.export {
            let path = data_paths.reports().join(&self.args.output);
            export_positions_to_csv(&summaries, &path)?;
            info!(path = %path.display(), "Exported position table");
            println!("\n✅ Exported {} positions to {}", summaries.len(), path.display());
        }

        let reportable = summaries.iter().filter(|s| s.is_reportable()).count();
        println!("\n📈 Position Summary:");
        println!("  Symbols: {}", summaries.len());
        println!("  In report: {}", reportable);
        println!(
            "  Data missing: {}",
            summaries
                .iter()
                .filter(|s| s.status == PositionStatus::DataMissing)
                .count()
        );

        println!();
        println!("💡 Use --export to save the position table to CSV");
        println!("💡 Use 'tradelog report' for the performance report only");

        Ok(())
    }
}

fn export_positions_to_csv(summaries: &[PositionSummary], path: &std::path::Path) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(path)?;

    // Write CSV header
    writeln!(
        file,
        "Symbol,Exchange,Total Buy Quantity,Average Buy Price,Total Sell Quantity,Average Sell Price,Net Quantity,Buy Value,PNL,ROI,Status"
    )?;

    // Write position data
    for summary in summaries {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{}",
            summary.symbol,
            summary.exchange,
            summary.total_buy_qty,
            summary
                .avg_buy_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            summary.total_sell_qty,
            summary
                .avg_sell_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            summary.net_qty,
            summary.buy_value,
            summary.pnl,
            summary.roi,
            summary.status
        )?;
    }

    Ok(())
}
