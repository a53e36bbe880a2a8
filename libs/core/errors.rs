use itrack_storage::StoreError;
use thiserror::Error;

/// Domain failures, kept separate so the http layer can map each class to
/// its own payload shape.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Create: one of `issue_title`, `issue_text`, `created_by` was missing
    /// or empty
    #[error("required field(s) missing")]
    RequiredFieldsMissing,

    /// Update/delete: the project or the issue id didn't resolve
    #[error("issue '{0}' was not found")]
    IssueNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
