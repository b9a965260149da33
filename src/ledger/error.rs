//! Ledger error types

use thiserror::Error;

/// Errors surfaced by the trade-ledger core
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("required column '{0}' missing from trade log")]
    MissingColumn(&'static str),
    #[error("failed to read trade log: {0}")]
    Read(#[from] csv::Error),
}
