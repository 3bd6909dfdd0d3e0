use medbook_model::Prescription;

use super::syntax::{PREFIX_DESCRIPTION, PREFIX_NAME};
use super::tokenizer::tokenize;
use super::util::{expect_fields, optional, preamble_index, required, sole_index};
use crate::commands::prescription::{
    ADD_PRESCRIPTION_USAGE, DELETE_PRESCRIPTION_USAGE, EDIT_PRESCRIPTION_USAGE,
};
use crate::commands::{AddPrescription, Command, DeletePrescription, EditPrescription};
use crate::error::ParseError;

pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let prefixes = [PREFIX_NAME, PREFIX_DESCRIPTION];
    let map = tokenize(args, &prefixes);
    expect_fields(&map, &prefixes, ADD_PRESCRIPTION_USAGE)?;

    let prescription = Prescription::new(
        required(&map, PREFIX_NAME)?,
        required(&map, PREFIX_DESCRIPTION)?,
    );
    Ok(Command::AddPrescription(AddPrescription { prescription }))
}

pub(crate) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_DESCRIPTION]);
    let index = preamble_index(&map, EDIT_PRESCRIPTION_USAGE)?;

    let medicine_name = optional(&map, PREFIX_NAME)?;
    let description = optional(&map, PREFIX_DESCRIPTION)?;
    if medicine_name.is_none() && description.is_none() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::EditPrescription(EditPrescription {
        index,
        medicine_name,
        description,
    }))
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, DELETE_PRESCRIPTION_USAGE)?;
    Ok(Command::DeletePrescription(DeletePrescription { index }))
}
