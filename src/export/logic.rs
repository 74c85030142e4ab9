// src/export/logic.rs

use crate::core::logic::{DriverReport, DriverStatusRow};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the driver status report.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        reports: &[DriverReport],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if reports.is_empty() {
            warning("No drivers match the selected filters.");
        }

        let rows: Vec<DriverStatusRow> = reports.iter().map(DriverStatusRow::from).collect();

        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        tracing::info!(format = format.as_str(), rows = rows.len(), file, "status report exported");
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
