use medbook_model::Appointment;

use super::syntax::{PREFIX_APPOINTMENT_TIME, PREFIX_DOCTOR_ID, PREFIX_PATIENT_ID};
use super::tokenizer::tokenize;
use super::util::{expect_fields, optional, required, sole_index};
use crate::commands::appointment::{
    ADD_APPOINTMENT_USAGE, DELETE_APPOINTMENT_USAGE, LIST_APPOINTMENT_USAGE,
};
use crate::commands::{AddAppointment, Command, DeleteAppointment, ListAppointments};
use crate::error::ParseError;

pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let prefixes = [PREFIX_PATIENT_ID, PREFIX_DOCTOR_ID, PREFIX_APPOINTMENT_TIME];
    let map = tokenize(args, &prefixes);
    expect_fields(&map, &prefixes, ADD_APPOINTMENT_USAGE)?;

    let appointment = Appointment::new(
        required(&map, PREFIX_PATIENT_ID)?,
        required(&map, PREFIX_DOCTOR_ID)?,
        required(&map, PREFIX_APPOINTMENT_TIME)?,
    );
    Ok(Command::AddAppointment(AddAppointment { appointment }))
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, DELETE_APPOINTMENT_USAGE)?;
    Ok(Command::DeleteAppointment(DeleteAppointment { index }))
}

pub(crate) fn parse_list(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_PATIENT_ID]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(LIST_APPOINTMENT_USAGE));
    }
    let person = optional(&map, PREFIX_PATIENT_ID)?;
    Ok(Command::ListAppointments(ListAppointments { person }))
}
