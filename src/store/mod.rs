//! Entity store: one JSON document holding the full technology list.
//!
//! The store is a single key-value entry on disk. Every mutation rewrites
//! the whole document; there is no partial update, no versioning, and a
//! single in-process writer, so last-writer-wins is safe.

pub mod seed;

use crate::errors::{AppError, AppResult};
use crate::models::Technology;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

pub use seed::default_technologies;

/// Load the technology list from `path`.
///
/// A missing file or a malformed document falls back to the seeded default
/// list without raising: the caller always gets a usable list. A parse
/// failure is surfaced as a warning only.
pub fn load(path: &str) -> Vec<Technology> {
    let p = Path::new(path);
    if !p.exists() {
        return default_technologies();
    }

    let content = match fs::read_to_string(p) {
        Ok(c) => c,
        Err(e) => {
            warning(format!("Could not read store '{path}': {e}. Using defaults."));
            return default_technologies();
        }
    };

    match serde_json::from_str::<Vec<Technology>>(&content) {
        Ok(items) => items,
        Err(e) => {
            warning(format!("Malformed store '{path}': {e}. Using defaults."));
            default_technologies()
        }
    }
}

/// Serialize the whole list pretty-printed and overwrite the store document.
pub fn save(path: &str, items: &[Technology]) -> AppResult<()> {
    let p = Path::new(path);
    if let Some(parent) = p.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(items)?;
    fs::write(p, json).map_err(|e| AppError::Store(format!("cannot write '{path}': {e}")))
}

/// Remove the store document (bulk clear-all). Missing file is a no-op.
pub fn clear(path: &str) -> AppResult<()> {
    let p = Path::new(path);
    if p.exists() {
        fs::remove_file(p)?;
    }
    Ok(())
}
