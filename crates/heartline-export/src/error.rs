//! Export error types.

use std::fmt;

use heartline_storage::StorageError;
use heartline_tabular::ArchiveError;
use thiserror::Error;

/// Errors that abort an export call.
///
/// Every failure is terminal for the call: no partial archive is returned.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The user targeted by a single-user export does not exist.
    #[error("User not found: {user_id}")]
    NotFound { user_id: String },

    /// The archive could not be assembled.
    #[error("Archive build failed: {0}")]
    ArchiveBuildFailure(#[from] ArchiveError),

    /// A store query failed or returned documents that do not decode.
    #[error("Query failed: {0}")]
    QueryFailure(#[from] StorageError),
}

impl ExportError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(user_id: impl Into<String>) -> Self {
        Self::NotFound {
            user_id: user_id.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailure(_))
    }

    #[must_use]
    pub fn is_archive_build_failure(&self) -> bool {
        matches!(self, Self::ArchiveBuildFailure(_))
    }

    /// Returns the error kind for logging/monitoring purposes.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::ArchiveBuildFailure(_) => ErrorKind::ArchiveBuildFailure,
            Self::QueryFailure(_) => ErrorKind::QueryFailure,
        }
    }
}

/// Coarse classification of [`ExportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    QueryFailure,
    ArchiveBuildFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::QueryFailure => write!(f, "query_failure"),
            Self::ArchiveBuildFailure => write!(f, "archive_build_failure"),
        }
    }
}

/// Result type alias using [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = ExportError::not_found("u1");
        assert!(err.is_not_found());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "User not found: u1");

        let err = ExportError::from(StorageError::connection_error("unavailable"));
        assert!(err.is_query_failure());
        assert_eq!(err.kind().to_string(), "query_failure");

        let err = ExportError::from(ArchiveError::DuplicateEntry("u1/messages.csv".into()));
        assert!(err.is_archive_build_failure());
        assert_eq!(err.kind().to_string(), "archive_build_failure");
        assert!(err.to_string().contains("u1/messages.csv"));
    }
}
