//! Commands that act on the session rather than on one record kind.

use medbook_model::{BookSnapshot, Model};

use super::CommandResult;
use super::{appointment, doctor, medical_history, patient, prescription};
use crate::error::CommandError;
use crate::input_history::InputHistory;

pub const CLEAR_USAGE: &str = "clear: Removes every record.";
pub const HISTORY_USAGE: &str = "history: Lists the commands entered in this session, most recent first.";
pub const UNDO_USAGE: &str = "undo: Reverts the last change to the records.";
pub const REDO_USAGE: &str = "redo: Reapplies the last undone change.";
pub const HELP_USAGE: &str = "help: Shows this message.";
pub const EXIT_USAGE: &str = "exit: Saves and quits.";

pub const MESSAGE_CLEARED: &str = "Records have been cleared!";
pub const MESSAGE_NO_HISTORY: &str = "You have not yet entered any commands.";
pub const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
pub const MESSAGE_REDO_SUCCESS: &str = "Redo success!";
pub const MESSAGE_EXIT: &str = "Exiting as requested ...";

/// Every command's usage, in the order `help` prints them.
pub const USAGES: &[&str] = &[
    patient::ADD_PATIENT_USAGE,
    patient::EDIT_PATIENT_USAGE,
    patient::DELETE_PATIENT_USAGE,
    patient::LIST_PATIENT_USAGE,
    patient::SEARCH_PATIENT_USAGE,
    patient::SEARCH_PATIENT_TAG_USAGE,
    patient::SELECT_USAGE,
    doctor::ADD_DOCTOR_USAGE,
    doctor::EDIT_DOCTOR_USAGE,
    doctor::DELETE_DOCTOR_USAGE,
    doctor::LIST_DOCTOR_USAGE,
    medical_history::ADD_MED_HIST_USAGE,
    medical_history::EDIT_MED_HIST_USAGE,
    medical_history::DELETE_MED_HIST_USAGE,
    medical_history::LIST_MED_HIST_USAGE,
    medical_history::SEARCH_MED_HIST_USAGE,
    medical_history::SELECT_MED_HIST_USAGE,
    prescription::ADD_PRESCRIPTION_USAGE,
    prescription::EDIT_PRESCRIPTION_USAGE,
    prescription::DELETE_PRESCRIPTION_USAGE,
    prescription::LIST_PRESCRIPTION_USAGE,
    appointment::ADD_APPOINTMENT_USAGE,
    appointment::DELETE_APPOINTMENT_USAGE,
    appointment::LIST_APPOINTMENT_USAGE,
    CLEAR_USAGE,
    HISTORY_USAGE,
    UNDO_USAGE,
    REDO_USAGE,
    HELP_USAGE,
    EXIT_USAGE,
];

/// Empties every collection as one undoable step. The id sequence is kept,
/// so ids handed out before the clear are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clear;

impl Clear {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.commit(|book| {
            let emptied = BookSnapshot {
                next_person_id: book.next_person_id(),
                ..BookSnapshot::default()
            };
            book.reset_data(emptied)
        })?;
        tracing::info!("records cleared");
        Ok(CommandResult::new(MESSAGE_CLEARED))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History;

impl History {
    pub fn execute(self, inputs: &InputHistory) -> CommandResult {
        if inputs.is_empty() {
            return CommandResult::new(MESSAGE_NO_HISTORY);
        }
        let listed: Vec<&str> = inputs.most_recent_first().collect();
        CommandResult::new(format!(
            "Entered commands (from most recent to earliest):\n{}",
            listed.join("\n")
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undo;

impl Undo {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.undo()?;
        Ok(CommandResult::new(MESSAGE_UNDO_SUCCESS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redo;

impl Redo {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.redo()?;
        Ok(CommandResult::new(MESSAGE_REDO_SUCCESS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help;

impl Help {
    pub fn execute(self) -> CommandResult {
        CommandResult {
            show_help: true,
            ..CommandResult::new(USAGES.join("\n\n"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit;

impl Exit {
    pub fn execute(self) -> CommandResult {
        CommandResult {
            exit: true,
            ..CommandResult::new(MESSAGE_EXIT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_core::PersonId;
    use medbook_model::{HistoryError, ModelError, Prescription};

    #[test]
    fn clear_keeps_the_id_sequence_and_is_undoable() {
        let mut model = Model::default();
        model
            .commit(|book| {
                book.add_prescription(Prescription::new(
                    "Aspirin".parse().unwrap(),
                    "100 mg".parse().unwrap(),
                ))
            })
            .unwrap();
        let next = model.book().next_person_id();

        Clear.execute(&mut model).unwrap();
        assert!(model.book().prescriptions().is_empty());
        assert_eq!(model.book().next_person_id(), next);

        Undo.execute(&mut model).unwrap();
        assert_eq!(model.book().prescriptions().len(), 1);
    }

    #[test]
    fn undo_and_redo_report_empty_history() {
        let mut model = Model::default();
        assert_eq!(
            Undo.execute(&mut model).unwrap_err(),
            CommandError::Model(ModelError::History(HistoryError::NothingToUndo))
        );
        assert_eq!(
            Redo.execute(&mut model).unwrap_err().to_string(),
            "No more commands to redo!"
        );
        assert_eq!(model.book().next_person_id(), PersonId::FIRST);
    }

    #[test]
    fn history_lists_newest_first() {
        let mut inputs = InputHistory::default();
        assert_eq!(History.execute(&inputs).feedback, MESSAGE_NO_HISTORY);

        inputs.record("list-patient");
        inputs.record("undo");
        assert_eq!(
            History.execute(&inputs).feedback,
            "Entered commands (from most recent to earliest):\nundo\nlist-patient"
        );
    }

    #[test]
    fn help_and_exit_set_their_flags() {
        let help = Help.execute();
        assert!(help.show_help && !help.exit);
        assert!(help.feedback.contains("add-patient"));

        let exit = Exit.execute();
        assert!(exit.exit && !exit.show_help);
    }
}
