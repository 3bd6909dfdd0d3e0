//! Turns one line of user input into a [`Command`].
//!
//! The first whitespace-separated word selects the command; the rest is
//! handed to that command's parser. Commands that take no arguments ignore
//! anything after the keyword.

mod appointment;
mod doctor;
mod medical_history;
mod patient;
mod prescription;
pub mod syntax;
pub mod tokenizer;
mod util;

use crate::commands::general::HELP_USAGE;
use crate::commands::{
    Clear, Command, Exit, Help, History, ListDoctors, ListMedHists, ListPatients,
    ListPrescriptions, Redo, Undo,
};
use crate::error::ParseError;

/// Parses a full command line.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    if word.is_empty() {
        return Err(ParseError::InvalidFormat(HELP_USAGE));
    }
    tracing::debug!(command = word, "parsing command");

    match word {
        "add-patient" => patient::parse_add(args),
        "edit-patient" => patient::parse_edit(args),
        "delete-patient" => patient::parse_delete(args),
        "list-patient" => Ok(Command::ListPatients(ListPatients)),
        "search-patient" => patient::parse_search(args),
        "search-patient-tag" => patient::parse_search_tag(args),
        "select" => patient::parse_select(args),

        "add-doctor" => doctor::parse_add(args),
        "edit-doctor" => doctor::parse_edit(args),
        "delete-doctor" => doctor::parse_delete(args),
        "list-doctor" => Ok(Command::ListDoctors(ListDoctors)),

        "add-medhist" => medical_history::parse_add(args),
        "edit-medhist" => medical_history::parse_edit(args),
        "delete-medhist" => medical_history::parse_delete(args),
        "list-medhist" => Ok(Command::ListMedHists(ListMedHists)),
        "search-medhist" => medical_history::parse_search(args),
        "select-medhist" => medical_history::parse_select(args),

        "add-presc" => prescription::parse_add(args),
        "edit-presc" => prescription::parse_edit(args),
        "delete-presc" => prescription::parse_delete(args),
        "list-presc" => Ok(Command::ListPrescriptions(ListPrescriptions)),

        "add-appt" => appointment::parse_add(args),
        "delete-appt" => appointment::parse_delete(args),
        "list-appt" => appointment::parse_list(args),

        "clear" => Ok(Command::Clear(Clear)),
        "history" => Ok(Command::History(History)),
        "undo" => Ok(Command::Undo(Undo)),
        "redo" => Ok(Command::Redo(Redo)),
        "help" => Ok(Command::Help(Help)),
        "exit" => Ok(Command::Exit(Exit)),

        _ => Err(ParseError::UnknownCommand),
    }
}
