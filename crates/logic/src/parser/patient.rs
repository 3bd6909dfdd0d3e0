use medbook_model::{PatientDetails, Tag};

use super::syntax::{
    PREFIX_ADDRESS, PREFIX_AGE, PREFIX_GENDER, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, Prefix,
};
use super::tokenizer::tokenize;
use super::util::{expect_fields, optional, preamble_index, required, set_for_edit, set_of, sole_index};
use crate::commands::patient::{
    ADD_PATIENT_USAGE, DELETE_PATIENT_USAGE, EDIT_PATIENT_USAGE, SEARCH_PATIENT_TAG_USAGE,
    SEARCH_PATIENT_USAGE, SELECT_USAGE,
};
use crate::commands::{
    AddPatient, Command, DeletePatient, EditPatient, EditPatientDescriptor, SearchPatients,
    SearchPatientsByTag, SelectPatient,
};
use crate::error::ParseError;

const PATIENT_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_GENDER,
    PREFIX_AGE,
    PREFIX_PHONE,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];

pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PATIENT_PREFIXES);
    expect_fields(
        &map,
        &[PREFIX_NAME, PREFIX_GENDER, PREFIX_AGE, PREFIX_PHONE, PREFIX_ADDRESS],
        ADD_PATIENT_USAGE,
    )?;

    let details = PatientDetails {
        name: required(&map, PREFIX_NAME)?,
        phone: required(&map, PREFIX_PHONE)?,
        gender: required(&map, PREFIX_GENDER)?,
        age: required(&map, PREFIX_AGE)?,
        address: required(&map, PREFIX_ADDRESS)?,
        tags: set_of(&map, PREFIX_TAG)?,
    };
    Ok(Command::AddPatient(AddPatient { details }))
}

pub(crate) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PATIENT_PREFIXES);
    let index = preamble_index(&map, EDIT_PATIENT_USAGE)?;

    let descriptor = EditPatientDescriptor {
        name: optional(&map, PREFIX_NAME)?,
        phone: optional(&map, PREFIX_PHONE)?,
        gender: optional(&map, PREFIX_GENDER)?,
        age: optional(&map, PREFIX_AGE)?,
        address: optional(&map, PREFIX_ADDRESS)?,
        tags: set_for_edit(&map, PREFIX_TAG)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::EditPatient(EditPatient { index, descriptor }))
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, DELETE_PATIENT_USAGE)?;
    Ok(Command::DeletePatient(DeletePatient { index }))
}

pub(crate) fn parse_select(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, SELECT_USAGE)?;
    Ok(Command::SelectPatient(SelectPatient { index }))
}

pub(crate) fn parse_search(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(SEARCH_PATIENT_USAGE));
    }
    Ok(Command::SearchPatients(SearchPatients { keywords }))
}

pub(crate) fn parse_search_tag(args: &str) -> Result<Command, ParseError> {
    let tags = args
        .split_whitespace()
        .map(|raw| raw.parse::<Tag>().map_err(ParseError::from))
        .collect::<Result<Vec<_>, _>>()?;
    if tags.is_empty() {
        return Err(ParseError::InvalidFormat(SEARCH_PATIENT_TAG_USAGE));
    }
    Ok(Command::SearchPatientsByTag(SearchPatientsByTag { tags }))
}
