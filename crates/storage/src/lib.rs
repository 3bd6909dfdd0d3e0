//! `medbook-storage` — JSON persistence for the record book.
//!
//! Loading validates every field exactly as strictly as the command parser,
//! so a corrupted file never produces an invalid in-memory record.

pub mod adapted;
pub mod error;
pub mod json_storage;
pub mod serializable;

pub use error::StorageError;
pub use json_storage::{BookStorage, JsonBookStorage};
pub use serializable::JsonSerializableBook;
