use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Progress of a tracked technology. Closed three-value enumeration,
/// serialized in kebab-case both in the store document and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not-started",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    /// Human-readable label for list and stats output.
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not started",
            Status::InProgress => "In progress",
            Status::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Status::InProgress)
    }

    pub fn is_not_started(&self) -> bool {
        matches!(self, Status::NotStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_round_trip() {
        for s in [Status::NotStarted, Status::InProgress, Status::Completed] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
            assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), s);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<Status>("\"done\"").is_err());
    }
}
