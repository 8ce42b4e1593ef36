use super::status::Status;
use serde::{Deserialize, Serialize};

/// A single tracked technology.
///
/// The store document is an array of these objects; `description`, `notes`,
/// `tags` and `resources` are optional on import and default to empty so
/// minimal documents (id/title/status/category only) still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Technology {
    pub fn new(id: i64, title: &str, description: &str, status: Status, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
            category: category.to_string(),
            notes: String::new(),
            tags: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Case-insensitive match on title or description.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Id assignment policy for new items: highest existing id plus one,
/// starting at 1 on an empty store.
pub fn next_id(items: &[Technology]) -> i64 {
    items.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
