//! Executable commands.
//!
//! Commands are single-shot values: `execute` consumes them. Every
//! precondition is checked before the book is touched, and every mutation
//! goes through [`Model::commit`] so that it becomes one undoable step.

pub mod appointment;
pub mod doctor;
pub mod general;
pub mod medical_history;
pub mod patient;
pub mod prescription;

use medbook_model::Model;

use crate::error::CommandError;
use crate::index::Index;
use crate::input_history::InputHistory;

pub use appointment::{AddAppointment, DeleteAppointment, ListAppointments};
pub use doctor::{AddDoctor, DeleteDoctor, EditDoctor, EditDoctorDescriptor, ListDoctors};
pub use general::{Clear, Exit, Help, History, Redo, Undo};
pub use medical_history::{
    AddMedHist, DeleteMedHist, EditMedHist, ListMedHists, SearchMedHists, SelectMedHist,
};
pub use patient::{
    AddPatient, DeletePatient, EditPatient, EditPatientDescriptor, ListPatients, SearchPatients,
    SearchPatientsByTag, SelectPatient,
};
pub use prescription::{AddPrescription, DeletePrescription, EditPrescription, ListPrescriptions};

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub feedback: String,
    /// The help text should be shown to the user.
    pub show_help: bool,
    /// The session should end.
    pub exit: bool,
    /// Set when the command succeeded but the data file could not be written.
    pub save_warning: Option<String>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPatient(AddPatient),
    EditPatient(EditPatient),
    DeletePatient(DeletePatient),
    ListPatients(ListPatients),
    SearchPatients(SearchPatients),
    SearchPatientsByTag(SearchPatientsByTag),
    SelectPatient(SelectPatient),

    AddDoctor(AddDoctor),
    EditDoctor(EditDoctor),
    DeleteDoctor(DeleteDoctor),
    ListDoctors(ListDoctors),

    AddMedHist(AddMedHist),
    EditMedHist(EditMedHist),
    DeleteMedHist(DeleteMedHist),
    ListMedHists(ListMedHists),
    SearchMedHists(SearchMedHists),
    SelectMedHist(SelectMedHist),

    AddPrescription(AddPrescription),
    EditPrescription(EditPrescription),
    DeletePrescription(DeletePrescription),
    ListPrescriptions(ListPrescriptions),

    AddAppointment(AddAppointment),
    DeleteAppointment(DeleteAppointment),
    ListAppointments(ListAppointments),

    Clear(Clear),
    History(History),
    Undo(Undo),
    Redo(Redo),
    Help(Help),
    Exit(Exit),
}

impl Command {
    /// Runs the command. `inputs` is only read by `history`.
    pub fn execute(
        self,
        model: &mut Model,
        inputs: &InputHistory,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Command::AddPatient(cmd) => cmd.execute(model),
            Command::EditPatient(cmd) => cmd.execute(model),
            Command::DeletePatient(cmd) => cmd.execute(model),
            Command::ListPatients(cmd) => Ok(cmd.execute(model)),
            Command::SearchPatients(cmd) => Ok(cmd.execute(model)),
            Command::SearchPatientsByTag(cmd) => Ok(cmd.execute(model)),
            Command::SelectPatient(cmd) => cmd.execute(model),

            Command::AddDoctor(cmd) => cmd.execute(model),
            Command::EditDoctor(cmd) => cmd.execute(model),
            Command::DeleteDoctor(cmd) => cmd.execute(model),
            Command::ListDoctors(cmd) => Ok(cmd.execute(model)),

            Command::AddMedHist(cmd) => cmd.execute(model),
            Command::EditMedHist(cmd) => cmd.execute(model),
            Command::DeleteMedHist(cmd) => cmd.execute(model),
            Command::ListMedHists(cmd) => Ok(cmd.execute(model)),
            Command::SearchMedHists(cmd) => Ok(cmd.execute(model)),
            Command::SelectMedHist(cmd) => cmd.execute(model),

            Command::AddPrescription(cmd) => cmd.execute(model),
            Command::EditPrescription(cmd) => cmd.execute(model),
            Command::DeletePrescription(cmd) => cmd.execute(model),
            Command::ListPrescriptions(cmd) => Ok(cmd.execute(model)),

            Command::AddAppointment(cmd) => cmd.execute(model),
            Command::DeleteAppointment(cmd) => cmd.execute(model),
            Command::ListAppointments(cmd) => Ok(cmd.execute(model)),

            Command::Clear(cmd) => cmd.execute(model),
            Command::History(cmd) => Ok(cmd.execute(inputs)),
            Command::Undo(cmd) => cmd.execute(model),
            Command::Redo(cmd) => cmd.execute(model),
            Command::Help(cmd) => Ok(cmd.execute()),
            Command::Exit(cmd) => Ok(cmd.execute()),
        }
    }

    /// Whether a successful run records an undoable step.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::AddPatient(_)
                | Command::EditPatient(_)
                | Command::DeletePatient(_)
                | Command::AddDoctor(_)
                | Command::EditDoctor(_)
                | Command::DeleteDoctor(_)
                | Command::AddMedHist(_)
                | Command::EditMedHist(_)
                | Command::DeleteMedHist(_)
                | Command::AddPrescription(_)
                | Command::EditPrescription(_)
                | Command::DeletePrescription(_)
                | Command::AddAppointment(_)
                | Command::DeleteAppointment(_)
                | Command::Clear(_)
        )
    }
}

/// Clones the record shown at `index`, or fails with `message`.
pub(crate) fn pick_displayed<T: Clone>(
    shown: Vec<&T>,
    index: Index,
    message: &'static str,
) -> Result<T, CommandError> {
    index
        .pick(&shown)
        .cloned()
        .ok_or(CommandError::InvalidIndex(message))
}
