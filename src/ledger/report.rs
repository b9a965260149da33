//! Portfolio-level performance report
//!
//! Derived from the non-DataMissing subset of the position table. All
//! degenerate cases (empty subset, zero wins and losses) resolve to zeros
//! or "not applicable" fields instead of dividing by zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::types::PositionSummary;

/// A PNL extreme and the symbol that produced it.
/// Replaces (String, Decimal) tuples in the public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlExtreme {
    pub symbol: String,
    pub pnl: Decimal,
}

/// Aggregate performance statistics, recomputed each run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub wins: usize,
    pub losses: usize,
    pub win_pct: Decimal,
    pub loss_pct: Decimal,
    pub total_win: Decimal,
    pub total_loss: Decimal,
    pub max_pnl: Option<PnlExtreme>,
    pub min_pnl: Option<PnlExtreme>,
    pub mean_roi_pct: Decimal,
}

impl PerformanceReport {
    /// Build the report over the reportable subset of the position table.
    ///
    /// Callers pass summaries in ascending symbol order (the aggregator's
    /// output order); PNL ties then resolve to the first symbol in that
    /// order.
    pub fn build(summaries: &[PositionSummary]) -> Self {
        let filtered: Vec<&PositionSummary> =
            summaries.iter().filter(|s| s.is_reportable()).collect();

        let wins = filtered.iter().filter(|s| s.pnl > Decimal::ZERO).count();
        let losses = filtered.iter().filter(|s| s.pnl < Decimal::ZERO).count();
        let total = wins + losses;

        let (win_pct, loss_pct) = if total == 0 {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let total = Decimal::from(total);
            (
                Decimal::from(wins) * Decimal::ONE_HUNDRED / total,
                Decimal::from(losses) * Decimal::ONE_HUNDRED / total,
            )
        };

        let total_win: Decimal = filtered
            .iter()
            .map(|s| s.pnl)
            .filter(|pnl| *pnl > Decimal::ZERO)
            .sum();
        let total_loss: Decimal = filtered
            .iter()
            .map(|s| s.pnl)
            .filter(|pnl| *pnl < Decimal::ZERO)
            .sum();

        let mut max_pnl: Option<PnlExtreme> = None;
        let mut min_pnl: Option<PnlExtreme> = None;
        for s in &filtered {
            if max_pnl.as_ref().map_or(true, |best| s.pnl > best.pnl) {
                max_pnl = Some(PnlExtreme {
                    symbol: s.symbol.clone(),
                    pnl: s.pnl,
                });
            }
            if min_pnl.as_ref().map_or(true, |worst| s.pnl < worst.pnl) {
                min_pnl = Some(PnlExtreme {
                    symbol: s.symbol.clone(),
                    pnl: s.pnl,
                });
            }
        }

        let mean_roi_pct = if filtered.is_empty() {
            Decimal::ZERO
        } else {
            let roi_sum: Decimal = filtered.iter().map(|s| s.roi).sum();
            roi_sum / Decimal::from(filtered.len()) * Decimal::ONE_HUNDRED
        };

        Self {
            wins,
            losses,
            win_pct,
            loss_pct,
            total_win,
            total_loss,
            max_pnl,
            min_pnl,
            mean_roi_pct,
        }
    }

    /// Render the fixed-format text block consumed by the presentation layer
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Key Metrics:\n");
        out.push_str(&format!("  - Wins: {:.2}\n", Decimal::from(self.wins)));
        out.push_str(&format!("  - Losses: {:.2}\n", Decimal::from(self.losses)));
        out.push_str(&format!("  - Win %: {:.2}\n", self.win_pct));
        out.push_str(&format!("  - Loss %: {:.2}\n", self.loss_pct));
        out.push_str(&format!("  - Total Win: {:.2}\n", self.total_win));
        out.push_str(&format!("  - Total Loss: {:.2}\n", self.total_loss));
        out.push_str(&format!("  - Max PNL: {}\n", format_extreme_pnl(&self.max_pnl)));
        out.push_str(&format!("  - ROI: {:.2}\n", self.mean_roi_pct));
        out.push_str(&format!("  - Min PNL: {}\n", format_extreme_pnl(&self.min_pnl)));
        out.push_str(&format!(
            "  - Symbol with Max PNL: {}\n",
            format_extreme_symbol(&self.max_pnl)
        ));
        out.push_str(&format!(
            "  - Symbol with Min PNL: {}\n",
            format_extreme_symbol(&self.min_pnl)
        ));
        out
    }
}

fn format_extreme_pnl(extreme: &Option<PnlExtreme>) -> String {
    match extreme {
        Some(e) => format!("{:.2}", e.pnl),
        None => "n/a".to_string(),
    }
}

fn format_extreme_symbol(extreme: &Option<PnlExtreme>) -> String {
    match extreme {
        Some(e) => e.symbol.clone(),
        None => "n/a".to_string(),
    }
}
