use crate::ledger::PositionStatus;

/// Parse a position status filter value
pub fn parse_status(s: &str) -> Result<PositionStatus, String> {
    match s {
        "closed" => Ok(PositionStatus::Closed),
        "holding" => Ok(PositionStatus::Holding),
        "partial-exit" => Ok(PositionStatus::PartialExit),
        "data-missing" => Ok(PositionStatus::DataMissing),
        other => Err(format!(
            "'{}' is not a valid status (expected closed, holding, partial-exit or data-missing)",
            other
        )),
    }
}
