//! CLI Commands module
//!
//! This module contains all command implementations for the tradelog CLI.
//! Each command follows a consistent pattern with dedicated Args and
//! Command structs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::ledger::{aggregate_positions, normalize, PositionSummary, RawTable};

// Command modules
pub mod analyze;
pub mod positions;
pub mod report;
pub mod version;

/// Load a trade-log CSV and run it through the normalize/aggregate pipeline
pub(crate) fn load_position_summaries(input: &Path) -> Result<Vec<PositionSummary>> {
    let table = RawTable::load_csv(input)
        .with_context(|| format!("Failed to read trade log '{}'", input.display()))?;

    let records = normalize(&table)
        .with_context(|| format!("Trade log '{}' failed schema validation", input.display()))?;

    info!(
        input = %input.display(),
        rows = table.row_count(),
        records = records.len(),
        "Normalized trade log"
    );

    Ok(aggregate_positions(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PositionStatus;
    use std::io::Write;

    fn write_log(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("trades.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_load_pipeline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            dir.path(),
            "Symbol,Exchange,Trade Type,Quantity,Price\n\
             AAA,NSE,buy,10,100\n\
             AAA,NSE,sell,10,120\n\
             BBB,NSE,buy,10,50\n",
        );

        let summaries = load_position_summaries(&path).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].symbol, "AAA");
        assert_eq!(summaries[0].status, PositionStatus::Closed);
        assert_eq!(summaries[1].status, PositionStatus::DataMissing);
    }

    #[test]
    fn test_load_pipeline_surfaces_schema_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "Ticker,Qty\nAAA,10\n");

        let err = load_position_summaries(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Symbol"));
    }
}
