//! Input normalizer: raw table rows into typed trade records
//!
//! Fully-empty rows are dropped and rows whose numeric cells fail to parse
//! are discarded with a warning. A missing required column is the only
//! fatal condition. Negative quantities and prices pass through unchecked.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::ledger::error::LedgerError;
use crate::ledger::table::RawTable;
use crate::ledger::types::{TradeRecord, TradeSide};

/// Columns the trade log must carry, header names exact
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Symbol", "Exchange", "Trade Type", "Quantity", "Price"];

struct ColumnIndex {
    symbol: usize,
    exchange: usize,
    trade_type: usize,
    quantity: usize,
    price: usize,
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Result<Self, LedgerError> {
        let lookup = |name: &'static str| {
            table
                .column_index(name)
                .ok_or(LedgerError::MissingColumn(name))
        };
        Ok(Self {
            symbol: lookup(REQUIRED_COLUMNS[0])?,
            exchange: lookup(REQUIRED_COLUMNS[1])?,
            trade_type: lookup(REQUIRED_COLUMNS[2])?,
            quantity: lookup(REQUIRED_COLUMNS[3])?,
            price: lookup(REQUIRED_COLUMNS[4])?,
        })
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Normalize a raw table into trade records
pub fn normalize(table: &RawTable) -> Result<Vec<TradeRecord>, LedgerError> {
    let columns = ColumnIndex::resolve(table)?;

    let mut records = Vec::with_capacity(table.row_count());
    for (row_number, row) in table.rows.iter().enumerate() {
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }

        let quantity = match cell(row, columns.quantity).parse::<Decimal>() {
            Ok(quantity) => quantity,
            Err(_) => {
                warn!(
                    row = row_number,
                    value = cell(row, columns.quantity),
                    "Discarding row with unparseable quantity"
                );
                continue;
            }
        };
        let price = match cell(row, columns.price).parse::<Decimal>() {
            Ok(price) => price,
            Err(_) => {
                warn!(
                    row = row_number,
                    value = cell(row, columns.price),
                    "Discarding row with unparseable price"
                );
                continue;
            }
        };

        records.push(TradeRecord {
            symbol: cell(row, columns.symbol).to_string(),
            exchange: cell(row, columns.exchange).to_string(),
            side: TradeSide::parse(cell(row, columns.trade_type)),
            quantity,
            price,
        });
    }

    debug!(
        input_rows = table.row_count(),
        records = records.len(),
        "Normalized trade log"
    );

    Ok(records)
}
