use crate::core::logic::DriverStatusRow;
use crate::errors::AppResult;
use std::path::Path;

/// Write the driver status report as pretty JSON.
pub(crate) fn write_json(path: &Path, rows: &[DriverStatusRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
