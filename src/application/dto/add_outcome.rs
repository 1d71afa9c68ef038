use crate::repository_analysis::domain::RepositoryRecord;

/// Result of registering a repository
///
/// `AlreadyExists` is a normal outcome, not an error: the same input string
/// was registered before and the catalog is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(RepositoryRecord),
    AlreadyExists { id: String },
}

impl AddOutcome {
    pub fn record(&self) -> Option<&RepositoryRecord> {
        match self {
            AddOutcome::Added(record) => Some(record),
            AddOutcome::AlreadyExists { .. } => None,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}
