//! Trade ledger type definitions with strong typing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of an executed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Parse a raw trade-type cell. Matching is case-sensitive: only the
    /// exact strings `"buy"` and `"sell"` are recognized; anything else
    /// returns `None` and the row stays out of both aggregates.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "buy" => Some(TradeSide::Buy),
            "sell" => Some(TradeSide::Sell),
            _ => None,
        }
    }
}

/// One normalized row of the trade log. Immutable once parsed.
///
/// `side` is `None` when the trade-type cell held an unrecognized value;
/// such rows still contribute their symbol to the position table but to
/// neither buy nor sell aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub exchange: String,
    pub side: Option<TradeSide>,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// Position status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionStatus {
    Closed,
    Holding,
    PartialExit,
    DataMissing,
}

impl std::fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PositionStatus::Closed => "Closed",
            PositionStatus::Holding => "Holding",
            PositionStatus::PartialExit => "Partial Exit",
            PositionStatus::DataMissing => "Data Missing",
        };
        write!(f, "{}", label)
    }
}

/// Aggregated position for one symbol, recomputed fresh on every run.
///
/// Average prices are `None` when the corresponding side has zero total
/// quantity, so a "no data" sentinel never leaks into arithmetic as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub symbol: String,
    /// First-seen exchange for this symbol
    pub exchange: String,
    pub total_buy_qty: Decimal,
    pub avg_buy_price: Option<Decimal>,
    pub total_sell_qty: Decimal,
    pub avg_sell_price: Option<Decimal>,
    pub net_qty: Decimal,
    pub buy_value: Decimal,
    pub pnl: Decimal,
    pub roi: Decimal,
    pub status: PositionStatus,
}

impl PositionSummary {
    /// Whether this position participates in portfolio-level statistics
    pub fn is_reportable(&self) -> bool {
        self.status != PositionStatus::DataMissing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_side_parse_is_case_sensitive() {
        assert_eq!(TradeSide::parse("buy"), Some(TradeSide::Buy));
        assert_eq!(TradeSide::parse("sell"), Some(TradeSide::Sell));
        assert_eq!(TradeSide::parse("Buy"), None);
        assert_eq!(TradeSide::parse("SELL"), None);
        assert_eq!(TradeSide::parse("short"), None);
        assert_eq!(TradeSide::parse(""), None);
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(PositionStatus::Closed.to_string(), "Closed");
        assert_eq!(PositionStatus::Holding.to_string(), "Holding");
        assert_eq!(PositionStatus::PartialExit.to_string(), "Partial Exit");
        assert_eq!(PositionStatus::DataMissing.to_string(), "Data Missing");
    }
}
