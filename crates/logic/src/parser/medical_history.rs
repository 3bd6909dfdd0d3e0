use medbook_core::PersonId;
use medbook_model::MedicalHistory;

use super::syntax::{PREFIX_DATE, PREFIX_DOCTOR_ID, PREFIX_PATIENT_ID, PREFIX_WRITE_UP};
use super::tokenizer::tokenize;
use super::util::{expect_fields, optional, preamble_index, required, sole_index};
use crate::commands::medical_history::{
    ADD_MED_HIST_USAGE, DELETE_MED_HIST_USAGE, EDIT_MED_HIST_USAGE, SEARCH_MED_HIST_USAGE,
    SELECT_MED_HIST_USAGE,
};
use crate::commands::{AddMedHist, Command, DeleteMedHist, EditMedHist, SearchMedHists, SelectMedHist};
use crate::error::ParseError;

pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let prefixes = [PREFIX_PATIENT_ID, PREFIX_DOCTOR_ID, PREFIX_DATE, PREFIX_WRITE_UP];
    let map = tokenize(args, &prefixes);
    expect_fields(&map, &prefixes, ADD_MED_HIST_USAGE)?;

    let med_hist = MedicalHistory::new(
        required(&map, PREFIX_PATIENT_ID)?,
        required(&map, PREFIX_DOCTOR_ID)?,
        required(&map, PREFIX_DATE)?,
        required(&map, PREFIX_WRITE_UP)?,
    );
    Ok(Command::AddMedHist(AddMedHist { med_hist }))
}

pub(crate) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_DATE, PREFIX_WRITE_UP]);
    let index = preamble_index(&map, EDIT_MED_HIST_USAGE)?;

    let date = optional(&map, PREFIX_DATE)?;
    let write_up = optional(&map, PREFIX_WRITE_UP)?;
    if date.is_none() && write_up.is_none() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::EditMedHist(EditMedHist { index, date, write_up }))
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, DELETE_MED_HIST_USAGE)?;
    Ok(Command::DeleteMedHist(DeleteMedHist { index }))
}

pub(crate) fn parse_search(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_PATIENT_ID]);
    expect_fields(&map, &[PREFIX_PATIENT_ID], SEARCH_MED_HIST_USAGE)?;
    let patient_id: PersonId = required(&map, PREFIX_PATIENT_ID)?;
    Ok(Command::SearchMedHists(SearchMedHists { patient_id }))
}

pub(crate) fn parse_select(args: &str) -> Result<Command, ParseError> {
    let index = sole_index(args, SELECT_MED_HIST_USAGE)?;
    Ok(Command::SelectMedHist(SelectMedHist { index }))
}
