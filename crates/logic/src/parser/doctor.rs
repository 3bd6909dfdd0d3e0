use medbook_model::DoctorDetails;

use super::syntax::{PREFIX_ADDRESS, PREFIX_NAME, PREFIX_PHONE, PREFIX_SPECIALISATION, Prefix};
use super::tokenizer::tokenize;
use super::util::{expect_fields, optional, preamble_index, required, set_for_edit, set_of, sole_index};
use crate::commands::doctor::{ADD_DOCTOR_USAGE, DELETE_DOCTOR_USAGE, EDIT_DOCTOR_USAGE};
use crate::commands::{AddDoctor, Command, DeleteDoctor, EditDoctor, EditDoctorDescriptor};
use crate::error::ParseError;

const DOCTOR_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS, PREFIX_SPECIALISATION];

pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, DOCTOR_PREFIXES);
    expect_fields(&map, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS], ADD_DOCTOR_USAGE)?;

    let details = DoctorDetails {
        name: required(&map, PREFIX_NAME)?,
        phone: required(&map, PREFIX_PHONE)?,
        address: required(&map, PREFIX_ADDRESS)?,
        specialisations: set_of(&map, PREFIX_SPECIALISATION)?,
    };
    Ok(Command::AddDoctor(AddDoctor { details }))
}

pub(crate) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, DOCTOR_PREFIXES);
    let index = preamble_index(&map, EDIT_DOCTOR_USAGE)?;

    let descriptor = EditDoctorDescriptor {
        name: optional(&map, PREFIX_NAME)?,
        phone: optional(&map, PREFIX_PHONE)?,
        address: optional(&map, PREFIX_ADDRESS)?,
        specialisations: set_for_edit(&map, PREFIX_SPECIALISATION)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::EditDoctor(EditDoctor { index, descriptor }))
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, DELETE_DOCTOR_USAGE)?;
    Ok(Command::DeleteDoctor(DeleteDoctor { index }))
}
