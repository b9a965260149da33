//! Position table formatting for terminal output

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::ledger::types::{PositionStatus, PositionSummary};

/// Render the per-symbol position table
pub fn position_table(summaries: &[PositionSummary]) -> String {
    if summaries.is_empty() {
        return "No positions found.\n".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Symbol", "Exchange", "Buy Qty", "Avg Buy", "Sell Qty", "Avg Sell", "Net Qty",
            "Buy Value", "PNL", "ROI", "Status",
        ]);

    for summary in summaries {
        let pnl_display = if summary.pnl > Decimal::ZERO {
            format!("{:.2}", summary.pnl).bright_green().to_string()
        } else if summary.pnl < Decimal::ZERO {
            format!("{:.2}", summary.pnl).bright_red().to_string()
        } else {
            format!("{:.2}", summary.pnl)
        };

        let status_display = match summary.status {
            PositionStatus::Closed => summary.status.to_string().bright_blue().to_string(),
            PositionStatus::Holding => summary.status.to_string().bright_green().to_string(),
            PositionStatus::PartialExit => summary.status.to_string().bright_yellow().to_string(),
            PositionStatus::DataMissing => summary.status.to_string().bright_black().to_string(),
        };

        table.add_row(vec![
            summary.symbol.clone(),
            summary.exchange.clone(),
            format!("{:.2}", summary.total_buy_qty),
            format_avg_price(summary.avg_buy_price),
            format!("{:.2}", summary.total_sell_qty),
            format_avg_price(summary.avg_sell_price),
            format!("{:.2}", summary.net_qty),
            format!("{:.2}", summary.buy_value),
            pnl_display,
            format!("{:.4}", summary.roi),
            status_display,
        ]);
    }

    format!("{}\n", table)
}

fn format_avg_price(price: Option<Decimal>) -> String {
    match price {
        Some(price) => format!("{:.2}", price),
        None => "-".to_string(),
    }
}
