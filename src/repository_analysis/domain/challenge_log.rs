use chrono::{DateTime, Utc};
use serde::Serialize;

/// One notable event in the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeLogEntry {
    pub title: String,
    pub description: String,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Append-only event log, newest entry first.
///
/// Observational only: nothing in the workflow reads it back.
#[derive(Debug, Clone, Default)]
pub struct ChallengeLog {
    entries: Vec<ChallengeLogEntry>,
}

impl ChallengeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        solved: bool,
        solution: Option<String>,
    ) {
        self.entries.insert(
            0,
            ChallengeLogEntry {
                title: title.into(),
                description: description.into(),
                solved,
                solution,
                timestamp: Utc::now(),
            },
        );
    }

    pub fn entries(&self) -> &[ChallengeLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
