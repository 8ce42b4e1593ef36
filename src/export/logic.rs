use crate::core::transfer::default_export_filename;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::Technology;
use crate::ui::messages::warning;
use crate::utils::{date, path::expand_tilde};
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the full technology list.
    ///
    /// - `format`: "json" | "csv"
    /// - `file`: output path; `None` falls back to the conventional
    ///   `technologies_<ISO-date>.json` (extension swapped for CSV) in the
    ///   current directory
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        items: &[Technology],
        format: ExportFormat,
        file: &Option<String>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(Self::default_filename(format)),
        };

        ensure_writable(&path, force)?;

        if items.is_empty() {
            warning("No technologies to export; writing an empty document.");
        }

        match format {
            ExportFormat::Json => export_json(items, &path)?,
            ExportFormat::Csv => export_csv(items, &path)?,
        }

        Ok(path)
    }

    fn default_filename(format: ExportFormat) -> String {
        let name = default_export_filename(date::today());
        match format {
            ExportFormat::Json => name,
            ExportFormat::Csv => name.replace(".json", ".csv"),
        }
    }
}
