use crate::core::transfer::export_string;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::Technology;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed. This is the same document format the
/// import command accepts, so an exported file round-trips unchanged.
pub(crate) fn export_json(items: &[Technology], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = export_string(items)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Flat row for CSV export: list fields joined with ';'.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    title: &'a str,
    description: &'a str,
    status: &'a str,
    category: &'a str,
    notes: &'a str,
    tags: String,
    resources: String,
}

impl<'a> From<&'a Technology> for CsvRow<'a> {
    fn from(t: &'a Technology) -> Self {
        Self {
            id: t.id,
            title: &t.title,
            description: &t.description,
            status: t.status.as_str(),
            category: &t.category,
            notes: &t.notes,
            tags: t.tags.join(";"),
            resources: t.resources.join(";"),
        }
    }
}

/// Export CSV (header included thanks to serde).
pub(crate) fn export_csv(items: &[Technology], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in items {
        wtr.serialize(CsvRow::from(item))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
