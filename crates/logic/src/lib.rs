//! `medbook-logic` — command parsing, command execution and the manager
//! that ties them to storage.

pub mod commands;
pub mod error;
pub mod index;
pub mod input_history;
pub mod manager;
pub mod parser;

pub use commands::{Command, CommandResult};
pub use error::{CommandError, LogicError, ParseError};
pub use index::Index;
pub use input_history::InputHistory;
pub use manager::LogicManager;
pub use parser::parse_command;
