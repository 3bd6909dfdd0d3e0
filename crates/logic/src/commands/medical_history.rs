//! Medical history commands.

use medbook_core::{Identity, PersonId};
use medbook_model::{MedicalHistory, Model, RecordDate, WriteUp};

use super::{CommandResult, pick_displayed};
use crate::error::CommandError;
use crate::index::Index;

pub const ADD_MED_HIST_USAGE: &str = "add-medhist: Adds a medical history entry. \
Parameters: pid/PATIENT_ID did/DOCTOR_ID dt/DATE w/WRITE_UP\n\
Example: add-medhist pid/1 did/2 dt/2019-10-10 w/Sore throat and mild fever";
pub const EDIT_MED_HIST_USAGE: &str = "edit-medhist: Edits the medical history at the given index of the displayed list. \
Parameters: INDEX [dt/DATE] [w/WRITE_UP]\nExample: edit-medhist 1 w/Recovered";
pub const DELETE_MED_HIST_USAGE: &str = "delete-medhist: Deletes the medical history at the given index of the displayed list. \
Parameters: INDEX\nExample: delete-medhist 1";
pub const LIST_MED_HIST_USAGE: &str = "list-medhist: Lists all medical histories.";
pub const SEARCH_MED_HIST_USAGE: &str = "search-medhist: Lists the medical histories of one patient. \
Parameters: pid/PATIENT_ID\nExample: search-medhist pid/1";
pub const SELECT_MED_HIST_USAGE: &str = "select-medhist: Selects the medical history at the given index of the displayed list. \
Parameters: INDEX\nExample: select-medhist 1";

pub const MESSAGE_DUPLICATE_MED_HIST: &str = "This medical history already exists in the records";
pub const MESSAGE_INVALID_MED_HIST_INDEX: &str = "The medical history index provided is invalid";

/// Adds an entry. Patient and doctor ids are not checked against the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMedHist {
    pub med_hist: MedicalHistory,
}

impl AddMedHist {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let med_hist = self.med_hist;
        if model.book().has_med_hist(&med_hist) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_MED_HIST));
        }

        model.commit(|book| book.add_med_hist(med_hist.clone()))?;
        tracing::info!(med_hist_id = %med_hist.med_hist_id(), "medical history added");
        Ok(CommandResult::new(format!("New medical history added: {med_hist}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMedHist {
    pub index: Index,
    pub date: Option<RecordDate>,
    pub write_up: Option<WriteUp>,
}

impl EditMedHist {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_med_hists(),
            self.index,
            MESSAGE_INVALID_MED_HIST_INDEX,
        )?;
        let edited = MedicalHistory::new(
            target.patient_id(),
            target.doctor_id(),
            self.date.unwrap_or(target.date()),
            self.write_up.unwrap_or_else(|| target.write_up().clone()),
        );

        if !target.same_identity(&edited) && model.book().has_med_hist(&edited) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_MED_HIST));
        }

        model.commit(|book| book.set_med_hist(&target, edited.clone()))?;
        model.show_all_med_hists();
        tracing::info!(med_hist_id = %edited.med_hist_id(), "medical history edited");
        Ok(CommandResult::new(format!("Edited Medical History: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMedHist {
    pub index: Index,
}

impl DeleteMedHist {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_med_hists(),
            self.index,
            MESSAGE_INVALID_MED_HIST_INDEX,
        )?;
        let removed = model.commit(|book| book.remove_med_hist(&target))?;
        tracing::info!(med_hist_id = %removed.med_hist_id(), "medical history deleted");
        Ok(CommandResult::new(format!("Deleted Medical History: {removed}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMedHists;

impl ListMedHists {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        model.show_all_med_hists();
        CommandResult::new("Listed all medical histories")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMedHists {
    pub patient_id: PersonId,
}

impl SearchMedHists {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        let patient_id = self.patient_id;
        model.filter_med_hists(move |m| m.patient_id() == patient_id);
        CommandResult::new(format!(
            "{} medical histories listed!",
            model.filtered_med_hists().len()
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectMedHist {
    pub index: Index,
}

impl SelectMedHist {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_med_hists(),
            self.index,
            MESSAGE_INVALID_MED_HIST_INDEX,
        )?;
        model.select_med_hist(Some(target));
        Ok(CommandResult::new(format!("Selected Medical History: {}", self.index)))
    }
}
