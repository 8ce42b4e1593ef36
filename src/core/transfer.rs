//! Import/export adapter for the portable JSON document format.
//!
//! Import fully replaces the store, never merges. The shape check is
//! deliberately shallow: the document must be an array and, when non-empty,
//! its FIRST element must carry non-null `id`, `title`, `status` and
//! `category`. Deeper problems (bad status string, wrong field type) still
//! fail the parse and reject the import, leaving the store untouched.

use crate::errors::{AppError, AppResult};
use crate::models::Technology;
use chrono::NaiveDate;
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 4] = ["id", "title", "status", "category"];

/// Parse candidate text as a technology list. Errors never touch the
/// caller's current list; a successful parse is a full replacement.
pub fn parse_import(text: &str) -> AppResult<Vec<Technology>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::InvalidImport(format!("not valid JSON: {e}")))?;

    let array = value
        .as_array()
        .ok_or_else(|| AppError::InvalidImport("expected an array of technologies".to_string()))?;

    if let Some(first) = array.first() {
        for field in REQUIRED_FIELDS {
            if first.get(field).is_none_or(Value::is_null) {
                return Err(AppError::InvalidImport(format!(
                    "first element is missing required field '{field}'"
                )));
            }
        }
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::InvalidImport(format!("malformed technology entry: {e}")))
}

/// Pretty-printed, human-diffable serialization of the full list.
pub fn export_string(items: &[Technology]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Export filename convention: `technologies_<ISO-date>.json`.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("technologies_{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::default_technologies;
    use chrono::NaiveDate;

    #[test]
    fn export_then_import_round_trips() {
        let items = default_technologies();
        let text = export_string(&items).unwrap();
        assert_eq!(parse_import(&text).unwrap(), items);
    }

    #[test]
    fn field_order_is_irrelevant() {
        let text = r#"[
            {"category": "backend", "status": "completed", "title": "Go", "id": 1}
        ]"#;
        let items = parse_import(text).unwrap();
        assert_eq!(items[0].title, "Go");
    }

    #[test]
    fn non_array_is_rejected() {
        let err = parse_import(r#"{"id": 1}"#).unwrap_err();
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_import("not json at all").is_err());
    }

    #[test]
    fn first_element_must_carry_required_fields() {
        for field in ["id", "title", "status", "category"] {
            let mut obj = serde_json::json!({
                "id": 1, "title": "Go", "status": "completed", "category": "backend"
            });
            obj.as_object_mut().unwrap().remove(field);
            let text = serde_json::to_string(&vec![obj]).unwrap();
            let err = parse_import(&text).unwrap_err();
            assert!(err.to_string().contains(field), "missing {field} accepted");
        }
    }

    #[test]
    fn null_required_field_is_rejected() {
        let text = r#"[{"id": 1, "title": null, "status": "completed", "category": "backend"}]"#;
        assert!(parse_import(text).is_err());
    }

    #[test]
    fn empty_array_is_accepted() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn bad_status_in_later_element_still_rejects() {
        let text = r#"[
            {"id": 1, "title": "Go", "status": "completed", "category": "backend"},
            {"id": 2, "title": "Zig", "status": "someday", "category": "backend"}
        ]"#;
        assert!(parse_import(text).is_err());
    }

    #[test]
    fn export_filename_uses_iso_date() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(default_export_filename(d), "technologies_2026-08-28.json");
    }
}
