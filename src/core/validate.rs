//! Field validation for newly created technologies.
//!
//! Mirrors the limits of the original entry form: short bounded title,
//! bounded description, capped unique tags, absolute http(s) resource URLs.
//! All failures are collected and reported together.

use crate::core::mutate::MAX_TAGS;
use crate::errors::{AppError, AppResult};

pub const TITLE_MIN: usize = 2;
pub const TITLE_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 500;

/// Unvalidated input for a new technology.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub resources: Vec<String>,
}

/// Check every field, returning all problems at once.
pub fn validate(draft: &Draft) -> AppResult<()> {
    let mut errors: Vec<String> = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push("title: required".to_string());
    } else if title.chars().count() < TITLE_MIN {
        errors.push(format!("title: at least {TITLE_MIN} characters"));
    } else if title.chars().count() > TITLE_MAX {
        errors.push(format!("title: at most {TITLE_MAX} characters"));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.push("description: required".to_string());
    } else if description.chars().count() < DESCRIPTION_MIN {
        errors.push(format!("description: at least {DESCRIPTION_MIN} characters"));
    } else if description.chars().count() > DESCRIPTION_MAX {
        errors.push(format!("description: at most {DESCRIPTION_MAX} characters"));
    }

    if draft.category.trim().is_empty() {
        errors.push("category: required".to_string());
    }

    if draft.tags.len() > MAX_TAGS {
        errors.push(format!("tags: at most {MAX_TAGS}"));
    }
    for (i, tag) in draft.tags.iter().enumerate() {
        if tag.trim().is_empty() {
            errors.push(format!("tag {}: empty", i + 1));
        } else if draft.tags[..i].iter().any(|t| t.trim() == tag.trim()) {
            errors.push(format!("tag {}: duplicate '{}'", i + 1, tag.trim()));
        }
    }

    for (i, url) in draft.resources.iter().enumerate() {
        if !is_valid_url(url) {
            errors.push(format!(
                "resource {}: invalid URL '{}' (must start with http:// or https://)",
                i + 1,
                url
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join("\n")))
    }
}

/// Absolute http(s) URL with a non-empty host part and no whitespace.
pub fn is_valid_url(url: &str) -> bool {
    let rest = match url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        Some(r) => r,
        None => return false,
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty() && !url.chars().any(char::is_whitespace)
}
