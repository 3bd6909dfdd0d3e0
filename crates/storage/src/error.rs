//! Storage error model.

use std::path::PathBuf;

use medbook_core::DomainError;
use thiserror::Error;

/// Failure reading or writing the data file.
///
/// Field-level variants render exactly the message a user would see when
/// typing the same bad value at the prompt.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record in the file lacks a required field.
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field is present but violates its constraint.
    #[error("{0}")]
    InvalidField(String),

    /// Two records of one kind share an identity.
    #[error("{0}")]
    DuplicateRecords(&'static str),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<DomainError> for StorageError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => StorageError::InvalidField(msg),
            other => StorageError::InvalidField(other.to_string()),
        }
    }
}
