//! View derivation: pure functions computing filtered subsets and
//! aggregate statistics from the technology list. Everything here is
//! deterministic and re-derivable on every invocation.

use crate::models::{Status, Technology};
use rand::Rng;
use rand::seq::IteratorRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    /// round(completed / total * 100); 0 for an empty list.
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryStats {
    pub total: usize,
    pub completed: usize,
}

impl CategoryStats {
    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Items whose title or description contains `search` (case-insensitive),
/// restricted to `status` when one is given. Identity when `search` is
/// empty and `status` is `None`.
pub fn filter_items(items: &[Technology], search: &str, status: Option<Status>) -> Vec<Technology> {
    items
        .iter()
        .filter(|t| t.matches_search(search))
        .filter(|t| status.is_none_or(|s| t.status == s))
        .cloned()
        .collect()
}

pub fn compute_stats(items: &[Technology]) -> Stats {
    let total = items.len();
    let completed = items.iter().filter(|t| t.status.is_completed()).count();
    let in_progress = items.iter().filter(|t| t.status.is_in_progress()).count();
    let not_started = items.iter().filter(|t| t.status.is_not_started()).count();

    Stats {
        total,
        completed,
        in_progress,
        not_started,
        completion_rate: percentage(completed, total),
    }
}

/// Per-category totals, grouped in first-seen order.
pub fn compute_category_stats(items: &[Technology]) -> Vec<(String, CategoryStats)> {
    let mut out: Vec<(String, CategoryStats)> = Vec::new();

    for t in items {
        let idx = match out.iter().position(|(c, _)| c == &t.category) {
            Some(i) => i,
            None => {
                out.push((t.category.clone(), CategoryStats::default()));
                out.len() - 1
            }
        };
        let entry = &mut out[idx].1;
        entry.total += 1;
        if t.status.is_completed() {
            entry.completed += 1;
        }
    }

    out
}

/// Pick a uniformly random not-started item, or `None` when every item
/// has been started.
pub fn pick_not_started<R: Rng + ?Sized>(items: &[Technology], rng: &mut R) -> Option<Technology> {
    items
        .iter()
        .filter(|t| t.status.is_not_started())
        .choose(rng)
        .cloned()
}
