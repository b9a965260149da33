//! Per-symbol position aggregation
//!
//! Pure batch computation: the full record set goes in, one summary per
//! distinct symbol comes out, in ascending symbol order. Symbols are
//! independent, so the per-symbol step fans out across a rayon pool and is
//! merged back with a plain ordered collect.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use crate::ledger::types::{PositionStatus, PositionSummary, TradeRecord, TradeSide};

/// Aggregate trade records into one position summary per distinct symbol.
///
/// Output order is ascending by symbol, which also serves as the canonical
/// tie-break order for the downstream report.
pub fn aggregate_positions(records: &[TradeRecord]) -> Vec<PositionSummary> {
    let mut groups: BTreeMap<&str, Vec<&TradeRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.symbol.as_str()).or_default().push(record);
    }

    let groups: Vec<(&str, Vec<&TradeRecord>)> = groups.into_iter().collect();
    let summaries: Vec<PositionSummary> = groups
        .into_par_iter()
        .map(|(symbol, trades)| summarize_symbol(symbol, &trades))
        .collect();

    debug!(
        records = records.len(),
        symbols = summaries.len(),
        "Aggregated positions"
    );

    summaries
}

fn summarize_symbol(symbol: &str, trades: &[&TradeRecord]) -> PositionSummary {
    let exchange = trades
        .first()
        .map(|t| t.exchange.clone())
        .unwrap_or_default();

    let mut total_buy_qty = Decimal::ZERO;
    let mut buy_notional = Decimal::ZERO;
    let mut total_sell_qty = Decimal::ZERO;
    let mut sell_notional = Decimal::ZERO;
    let mut has_buys = false;
    let mut has_sells = false;

    for trade in trades {
        match trade.side {
            Some(TradeSide::Buy) => {
                has_buys = true;
                total_buy_qty += trade.quantity;
                buy_notional += trade.quantity * trade.price;
            }
            Some(TradeSide::Sell) => {
                has_sells = true;
                total_sell_qty += trade.quantity;
                sell_notional += trade.quantity * trade.price;
            }
            // Unrecognized trade types keep the symbol in the table but
            // contribute to neither side.
            None => {}
        }
    }

    let avg_buy_price = weighted_average(buy_notional, total_buy_qty);
    let avg_sell_price = weighted_average(sell_notional, total_sell_qty);
    let net_qty = total_buy_qty - total_sell_qty;

    // Cost basis attributed to the sold portion: for a partially exited
    // position this is the sold quantity at the average buy price, not the
    // full position's cost.
    let buy_value = if net_qty.is_zero() {
        total_buy_qty * avg_buy_price.unwrap_or(Decimal::ZERO)
    } else if net_qty > Decimal::ZERO {
        total_sell_qty * avg_buy_price.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let avg_buy = avg_buy_price.unwrap_or(Decimal::ZERO);
    let avg_sell = avg_sell_price.unwrap_or(Decimal::ZERO);
    let pnl = if avg_buy.is_zero() || net_qty < Decimal::ZERO || avg_sell.is_zero() {
        Decimal::ZERO
    } else {
        (avg_sell - avg_buy) * total_sell_qty
    };

    let roi = if buy_value.is_zero() || pnl.is_zero() {
        Decimal::ZERO
    } else {
        pnl / buy_value
    };

    let status = if !has_buys || !has_sells {
        PositionStatus::DataMissing
    } else if net_qty.is_zero() {
        PositionStatus::Closed
    } else if net_qty > Decimal::ZERO && total_sell_qty > Decimal::ZERO {
        PositionStatus::PartialExit
    } else if net_qty > Decimal::ZERO {
        PositionStatus::Holding
    } else {
        // Over-sold: more sold than bought, nothing sensible to report
        PositionStatus::DataMissing
    };

    PositionSummary {
        symbol: symbol.to_string(),
        exchange,
        total_buy_qty,
        avg_buy_price,
        total_sell_qty,
        avg_sell_price,
        net_qty,
        buy_value,
        pnl,
        roi,
        status,
    }
}

fn weighted_average(notional: Decimal, quantity: Decimal) -> Option<Decimal> {
    if quantity.is_zero() {
        None
    } else {
        Some(notional / quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str, side: Option<TradeSide>, quantity: Decimal, price: Decimal) -> TradeRecord {
        TradeRecord {
            symbol: symbol.to_string(),
            exchange: "NSE".to_string(),
            side,
            quantity,
            price,
        }
    }

    fn buy(symbol: &str, quantity: Decimal, price: Decimal) -> TradeRecord {
        trade(symbol, Some(TradeSide::Buy), quantity, price)
    }

    fn sell(symbol: &str, quantity: Decimal, price: Decimal) -> TradeRecord {
        trade(symbol, Some(TradeSide::Sell), quantity, price)
    }

    #[test]
    fn test_closed_position_round_trip() {
        let records = vec![buy("AAA", dec!(10), dec!(100)), sell("AAA", dec!(10), dec!(120))];
        let summaries = aggregate_positions(&records);

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.total_buy_qty, dec!(10));
        assert_eq!(s.avg_buy_price, Some(dec!(100)));
        assert_eq!(s.total_sell_qty, dec!(10));
        assert_eq!(s.avg_sell_price, Some(dec!(120)));
        assert_eq!(s.net_qty, dec!(0));
        assert_eq!(s.buy_value, dec!(1000));
        assert_eq!(s.pnl, dec!(200));
        assert_eq!(s.roi, dec!(0.2));
        assert_eq!(s.status, PositionStatus::Closed);
    }

    #[test]
    fn test_one_sided_symbol_is_data_missing_but_retained() {
        let records = vec![buy("BBB", dec!(10), dec!(50))];
        let summaries = aggregate_positions(&records);

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.status, PositionStatus::DataMissing);
        assert_eq!(s.avg_sell_price, None);
        assert_eq!(s.pnl, dec!(0));
        assert_eq!(s.roi, dec!(0));
        assert!(!s.is_reportable());
    }

    #[test]
    fn test_partial_exit_uses_sold_portion_cost_basis() {
        let records = vec![buy("CCC", dec!(20), dec!(10)), sell("CCC", dec!(5), dec!(8))];
        let summaries = aggregate_positions(&records);

        let s = &summaries[0];
        assert_eq!(s.net_qty, dec!(15));
        assert_eq!(s.buy_value, dec!(50));
        assert_eq!(s.pnl, dec!(-10));
        assert_eq!(s.roi, dec!(-0.2));
        assert_eq!(s.status, PositionStatus::PartialExit);
    }

    #[test]
    fn test_over_sold_symbol_reports_zero_pnl() {
        let records = vec![buy("DDD", dec!(5), dec!(10)), sell("DDD", dec!(8), dec!(12))];
        let summaries = aggregate_positions(&records);

        let s = &summaries[0];
        assert_eq!(s.net_qty, dec!(-3));
        assert_eq!(s.buy_value, dec!(0));
        assert_eq!(s.pnl, dec!(0));
        assert_eq!(s.roi, dec!(0));
        assert_eq!(s.status, PositionStatus::DataMissing);
    }

    #[test]
    fn test_weighted_averages_over_multiple_fills() {
        let records = vec![
            buy("EEE", dec!(10), dec!(100)),
            buy("EEE", dec!(30), dec!(120)),
            sell("EEE", dec!(40), dec!(150)),
        ];
        let summaries = aggregate_positions(&records);

        let s = &summaries[0];
        // (10*100 + 30*120) / 40 = 115
        assert_eq!(s.avg_buy_price, Some(dec!(115)));
        assert_eq!(s.avg_sell_price, Some(dec!(150)));
        assert_eq!(s.status, PositionStatus::Closed);
        assert_eq!(s.pnl, dec!(1400));
    }

    #[test]
    fn test_unrecognized_side_contributes_symbol_only() {
        let records = vec![trade("FFF", None, dec!(10), dec!(100))];
        let summaries = aggregate_positions(&records);

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.total_buy_qty, dec!(0));
        assert_eq!(s.total_sell_qty, dec!(0));
        assert_eq!(s.status, PositionStatus::DataMissing);
    }

    #[test]
    fn test_net_invariant_and_ascending_symbol_order() {
        let records = vec![
            buy("ZZZ", dec!(3), dec!(10)),
            sell("ZZZ", dec!(1), dec!(11)),
            buy("AAA", dec!(2), dec!(5)),
            sell("MMM", dec!(4), dec!(7)),
        ];
        let summaries = aggregate_positions(&records);

        let symbols: Vec<&str> = summaries.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "MMM", "ZZZ"]);
        for s in &summaries {
            assert_eq!(s.net_qty, s.total_buy_qty - s.total_sell_qty);
        }
    }

    #[test]
    fn test_first_seen_exchange_wins() {
        let records = vec![
            trade("GGG", Some(TradeSide::Buy), dec!(1), dec!(1)),
            TradeRecord {
                exchange: "BSE".to_string(),
                ..sell("GGG", dec!(1), dec!(2))
            },
        ];
        let summaries = aggregate_positions(&records);
        assert_eq!(summaries[0].exchange, "NSE");
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![
            buy("AAA", dec!(10), dec!(100)),
            sell("AAA", dec!(4), dec!(130)),
            buy("BBB", dec!(7), dec!(3)),
        ];
        let first = aggregate_positions(&records);
        let second = aggregate_positions(&records);
        assert_eq!(first, second);
    }
}
