use medbook_core::DomainError;
use medbook_model::ModelError;
use medbook_storage::StorageError;
use thiserror::Error;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// The command text could not be turned into a command. The book is never touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    /// Wrong argument shape; carries the usage text of the command.
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(&'static str),

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// A field value broke its constraints; carries the constraint message.
    #[error("{0}")]
    InvalidValue(String),
}

impl From<DomainError> for ParseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidValue(msg),
            other => Self::InvalidValue(other.to_string()),
        }
    }
}

/// A well-formed command was refused by the book or the history.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Duplicate(&'static str),

    #[error("{0}")]
    InvalidIndex(&'static str),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Anything `LogicManager` can report.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// Loading the data file failed; fatal at start-up.
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored records could not be loaded: {0}")]
    Load(DomainError),
}
