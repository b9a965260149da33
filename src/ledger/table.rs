//! Raw rectangular table handed over by the file-ingestion layer
//!
//! The upstream collaborator owns file-format detection and header-row
//! location; this module only reads a plain CSV into headers plus string
//! rows. All typing happens later in the normalizer.

use std::path::Path;

use tracing::debug;

use crate::ledger::error::LedgerError;

/// Untyped table: a header row and string cells, exactly as read
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a CSV file into a raw table. Cells are trimmed; ragged rows are
    /// tolerated (missing cells read back as empty).
    pub fn load_csv(path: &Path) -> Result<Self, LedgerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
        }

        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "Loaded trade log"
        );

        Ok(Self { headers, rows })
    }

    /// Index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv_trims_cells_and_tolerates_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trades.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Symbol, Exchange ,Trade Type,Quantity,Price").unwrap();
        writeln!(file, "AAA,NSE, buy ,10,100").unwrap();
        writeln!(file, "BBB,NSE,sell").unwrap();
        drop(file);

        let table = RawTable::load_csv(&path).unwrap();
        assert_eq!(
            table.headers,
            vec!["Symbol", "Exchange", "Trade Type", "Quantity", "Price"]
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][2], "buy");
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_column_index_is_exact_match() {
        let table = RawTable::new(
            vec!["Symbol".to_string(), "Trade Type".to_string()],
            vec![],
        );
        assert_eq!(table.column_index("Symbol"), Some(0));
        assert_eq!(table.column_index("Trade Type"), Some(1));
        assert_eq!(table.column_index("symbol"), None);
    }

    #[test]
    fn test_load_csv_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RawTable::load_csv(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(LedgerError::Read(_))));
    }
}
