use std::error::Error;

use crate::leave::ValidationError;

/// Errors that can occur during repository operations.
///
/// Generic over the slot's error type, so any backend's failures pass through
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError<E: Error> {
    /// An update referenced an id that is not in the stored collection.
    #[error("leave `{0}` not found")]
    NotFound(String),

    /// The stored document is not a valid JSON leave collection.
    ///
    /// The repository surfaces this instead of treating the slot as empty: a
    /// whole-document rewrite after a silent reset would destroy whatever the
    /// corrupted document still holds.
    #[error("stored leave collection is corrupted: {0}")]
    Parse(#[from] serde_json::Error),

    /// The record violates an invariant of the collection.
    #[error("invalid leave: {0}")]
    Invalid(#[from] ValidationError),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Slot(E),
}

/// Errors that can occur while fetching the user directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The static user resource could not be retrieved.
    #[error("could not fetch the user list: {0}")]
    Fetch(#[from] std::io::Error),

    /// The user resource is not a valid JSON user array.
    #[error("user list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
