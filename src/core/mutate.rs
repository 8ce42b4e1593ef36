//! Mutation commands over the technology list.
//!
//! Every command is a pure transformation: it takes the current list and
//! returns a new one. Persistence is the caller's job. Mutating an unknown
//! id is a silent no-op, not an error.

use crate::models::{Status, Technology};

pub const MAX_TAGS: usize = 10;

/// Replace the status of the one item whose id matches.
pub fn set_status(items: &[Technology], id: i64, status: Status) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            if t.id == id {
                let mut t = t.clone();
                t.status = status;
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Apply `set_status` to every id in `ids`. Each mutation touches a
/// disjoint item, so order of application does not matter.
pub fn bulk_set_status(items: &[Technology], ids: &[i64], status: Status) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            if ids.contains(&t.id) {
                let mut t = t.clone();
                t.status = status;
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn mark_all_completed(items: &[Technology]) -> Vec<Technology> {
    set_all(items, Status::Completed)
}

pub fn reset_all_statuses(items: &[Technology]) -> Vec<Technology> {
    set_all(items, Status::NotStarted)
}

fn set_all(items: &[Technology], status: Status) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            let mut t = t.clone();
            t.status = status;
            t
        })
        .collect()
}

/// Replace the notes field for one item.
pub fn set_notes(items: &[Technology], id: i64, notes: &str) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            if t.id == id {
                let mut t = t.clone();
                t.notes = notes.to_string();
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Add a tag to one item. No-op when the tag is empty, already present,
/// or the item already carries `MAX_TAGS` tags.
pub fn add_tag(items: &[Technology], id: i64, tag: &str) -> Vec<Technology> {
    let tag = tag.trim();
    items
        .iter()
        .map(|t| {
            if t.id == id
                && !tag.is_empty()
                && !t.tags.iter().any(|x| x == tag)
                && t.tags.len() < MAX_TAGS
            {
                let mut t = t.clone();
                t.tags.push(tag.to_string());
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn remove_tag(items: &[Technology], id: i64, tag: &str) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            if t.id == id {
                let mut t = t.clone();
                t.tags.retain(|x| x != tag);
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Add a learning resource URL to one item. Duplicates are ignored.
pub fn add_resource(items: &[Technology], id: i64, url: &str) -> Vec<Technology> {
    let url = url.trim();
    items
        .iter()
        .map(|t| {
            if t.id == id && !url.is_empty() && !t.resources.iter().any(|x| x == url) {
                let mut t = t.clone();
                t.resources.push(url.to_string());
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn remove_resource(items: &[Technology], id: i64, url: &str) -> Vec<Technology> {
    items
        .iter()
        .map(|t| {
            if t.id == id {
                let mut t = t.clone();
                t.resources.retain(|x| x != url);
                t
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Append a new item. Id assignment is the caller's responsibility
/// (see `models::next_id`).
pub fn add_item(items: &[Technology], item: Technology) -> Vec<Technology> {
    let mut out = items.to_vec();
    out.push(item);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::default_technologies;

    #[test]
    fn set_status_touches_only_matching_id() {
        let items = default_technologies();
        let out = set_status(&items, 5, Status::Completed);
        assert_eq!(out[4].status, Status::Completed);
        for (before, after) in items.iter().zip(&out) {
            assert_eq!(before.id, after.id);
            if before.id != 5 {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn set_status_unknown_id_is_noop() {
        let items = default_technologies();
        assert_eq!(set_status(&items, 999, Status::Completed), items);
    }

    #[test]
    fn bulk_set_status_touches_exactly_named_ids() {
        let items = default_technologies();
        let ids = [2, 5, 7];
        let out = bulk_set_status(&items, &ids, Status::Completed);
        for (before, after) in items.iter().zip(&out) {
            if ids.contains(&after.id) {
                assert_eq!(after.status, Status::Completed);
            } else {
                assert_eq!(before, after);
            }
        }
        // order preserved
        let order: Vec<i64> = out.iter().map(|t| t.id).collect();
        assert_eq!(order, items.iter().map(|t| t.id).collect::<Vec<_>>());
    }

    #[test]
    fn reset_all_clears_every_status() {
        let out = reset_all_statuses(&default_technologies());
        assert!(out.iter().all(|t| t.status == Status::NotStarted));
    }

    #[test]
    fn mark_all_completes_every_status() {
        let out = mark_all_completed(&default_technologies());
        assert!(out.iter().all(|t| t.status == Status::Completed));
    }

    #[test]
    fn set_notes_replaces_text() {
        let items = default_technologies();
        let out = set_notes(&items, 1, "solid grasp now");
        assert_eq!(out[0].notes, "solid grasp now");
        let out = set_notes(&out, 1, "");
        assert_eq!(out[0].notes, "");
    }

    #[test]
    fn add_tag_dedupes_and_caps() {
        let items = default_technologies();
        let out = add_tag(&items, 1, "hooks");
        let out = add_tag(&out, 1, "hooks");
        assert_eq!(out[0].tags, vec!["hooks"]);

        let mut capped = out;
        for i in 0..MAX_TAGS {
            capped = add_tag(&capped, 1, &format!("t{i}"));
        }
        assert_eq!(capped[0].tags.len(), MAX_TAGS);
    }

    #[test]
    fn remove_tag_unknown_value_is_noop() {
        let items = add_tag(&default_technologies(), 1, "hooks");
        let out = remove_tag(&items, 1, "nope");
        assert_eq!(out, items);
        let out = remove_tag(&items, 1, "hooks");
        assert!(out[0].tags.is_empty());
    }

    #[test]
    fn resources_add_and_remove() {
        let items = default_technologies();
        let out = add_resource(&items, 2, "https://react.dev/learn");
        assert_eq!(out[1].resources, vec!["https://react.dev/learn"]);
        let out = remove_resource(&out, 2, "https://react.dev/learn");
        assert!(out[1].resources.is_empty());
    }
}
