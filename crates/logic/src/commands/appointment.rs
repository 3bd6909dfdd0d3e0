//! Appointment commands.

use medbook_core::PersonId;
use medbook_model::{Appointment, Model};

use super::{CommandResult, pick_displayed};
use crate::error::CommandError;
use crate::index::Index;

pub const ADD_APPOINTMENT_USAGE: &str = "add-appt: Books an appointment between a patient and a doctor. \
Parameters: pid/PATIENT_ID did/DOCTOR_ID tm/TIME\n\
Example: add-appt pid/1 did/2 tm/2019-10-23 16:00";
pub const DELETE_APPOINTMENT_USAGE: &str = "delete-appt: Deletes the appointment at the given index of the displayed list. \
Parameters: INDEX\nExample: delete-appt 1";
pub const LIST_APPOINTMENT_USAGE: &str = "list-appt: Lists all appointments, or those of one person. \
Parameters: [pid/PERSON_ID]\nExample: list-appt pid/1";

pub const MESSAGE_DUPLICATE_APPOINTMENT: &str = "This appointment already exists in the records";
pub const MESSAGE_INVALID_APPOINTMENT_INDEX: &str = "The appointment index provided is invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointment {
    pub appointment: Appointment,
}

impl AddAppointment {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let appointment = self.appointment;
        if model.book().has_appointment(&appointment) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_APPOINTMENT));
        }

        model.commit(|book| book.add_appointment(appointment.clone()))?;
        tracing::info!(
            patient = %appointment.patient_id(),
            doctor = %appointment.doctor_id(),
            "appointment added"
        );
        Ok(CommandResult::new(format!("New appointment added: {appointment}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAppointment {
    pub index: Index,
}

impl DeleteAppointment {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_appointments(),
            self.index,
            MESSAGE_INVALID_APPOINTMENT_INDEX,
        )?;
        let removed = model.commit(|book| book.remove_appointment(&target))?;
        tracing::info!(patient = %removed.patient_id(), "appointment deleted");
        Ok(CommandResult::new(format!("Deleted Appointment: {removed}")))
    }
}

/// Lists every appointment, or only those involving one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAppointments {
    pub person: Option<PersonId>,
}

impl ListAppointments {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        match self.person {
            None => {
                model.show_all_appointments();
                CommandResult::new("Listed all appointments")
            }
            Some(person) => {
                model.filter_appointments(move |a| a.involves(person));
                CommandResult::new(format!(
                    "{} appointments listed!",
                    model.filtered_appointments().len()
                ))
            }
        }
    }
}
