//! Prescription commands.

use medbook_core::Identity;
use medbook_model::{Description, MedicineName, Model, Prescription};

use super::{CommandResult, pick_displayed};
use crate::error::CommandError;
use crate::index::Index;

pub const ADD_PRESCRIPTION_USAGE: &str = "add-presc: Adds a prescription to the records. \
Parameters: n/MEDICINE_NAME d/DESCRIPTION\n\
Example: add-presc n/Acetaminophen d/500 mg, for relieving pain";
pub const EDIT_PRESCRIPTION_USAGE: &str = "edit-presc: Edits the prescription at the given index of the displayed list. \
Parameters: INDEX [n/MEDICINE_NAME] [d/DESCRIPTION]\nExample: edit-presc 1 d/250 mg, twice daily";
pub const DELETE_PRESCRIPTION_USAGE: &str = "delete-presc: Deletes the prescription at the given index of the displayed list. \
Parameters: INDEX\nExample: delete-presc 1";
pub const LIST_PRESCRIPTION_USAGE: &str = "list-presc: Lists all prescriptions.";

pub const MESSAGE_DUPLICATE_PRESCRIPTION: &str = "This prescription already exists in the records";
pub const MESSAGE_INVALID_PRESCRIPTION_INDEX: &str = "The prescription index provided is invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPrescription {
    pub prescription: Prescription,
}

impl AddPrescription {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let prescription = self.prescription;
        if model.book().has_prescription(&prescription) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_PRESCRIPTION));
        }

        model.commit(|book| book.add_prescription(prescription.clone()))?;
        tracing::info!(medicine = %prescription.medicine_name(), "prescription added");
        Ok(CommandResult::new(format!("New prescription added: {prescription}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPrescription {
    pub index: Index,
    pub medicine_name: Option<MedicineName>,
    pub description: Option<Description>,
}

impl EditPrescription {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_prescriptions(),
            self.index,
            MESSAGE_INVALID_PRESCRIPTION_INDEX,
        )?;
        let edited = Prescription::new(
            self.medicine_name
                .unwrap_or_else(|| target.medicine_name().clone()),
            self.description
                .unwrap_or_else(|| target.description().clone()),
        );

        if !target.same_identity(&edited) && model.book().has_prescription(&edited) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_PRESCRIPTION));
        }

        model.commit(|book| book.set_prescription(&target, edited.clone()))?;
        model.show_all_prescriptions();
        tracing::info!(medicine = %edited.medicine_name(), "prescription edited");
        Ok(CommandResult::new(format!("Edited Prescription: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrescription {
    pub index: Index,
}

impl DeletePrescription {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_prescriptions(),
            self.index,
            MESSAGE_INVALID_PRESCRIPTION_INDEX,
        )?;
        let removed = model.commit(|book| book.remove_prescription(&target))?;
        tracing::info!(medicine = %removed.medicine_name(), "prescription deleted");
        Ok(CommandResult::new(format!("Deleted Prescription: {removed}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPrescriptions;

impl ListPrescriptions {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        model.show_all_prescriptions();
        CommandResult::new("Listed all prescriptions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presc(name: &str, description: &str) -> Prescription {
        Prescription::new(name.parse().unwrap(), description.parse().unwrap())
    }

    #[test]
    fn duplicate_prescription_keeps_size() {
        let mut model = Model::default();
        let acetaminophen = presc("Acetaminophen", "500 mg, for relieving pain");
        AddPrescription { prescription: acetaminophen.clone() }
            .execute(&mut model)
            .unwrap();

        let err = AddPrescription { prescription: acetaminophen }
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PRESCRIPTION);
        assert_eq!(model.book().prescriptions().len(), 1);
    }

    #[test]
    fn same_name_with_other_description_is_distinct() {
        let mut model = Model::default();
        AddPrescription { prescription: presc("Aspirin", "100 mg") }
            .execute(&mut model)
            .unwrap();
        AddPrescription { prescription: presc("Aspirin", "300 mg") }
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.book().prescriptions().len(), 2);
    }

    #[test]
    fn edit_onto_existing_prescription_is_rejected() {
        let mut model = Model::default();
        AddPrescription { prescription: presc("Aspirin", "100 mg") }
            .execute(&mut model)
            .unwrap();
        AddPrescription { prescription: presc("Aspirin", "300 mg") }
            .execute(&mut model)
            .unwrap();

        let err = EditPrescription {
            index: Index::from_zero_based(1),
            medicine_name: None,
            description: Some("100 mg".parse().unwrap()),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err, CommandError::Duplicate(MESSAGE_DUPLICATE_PRESCRIPTION));
    }

    #[test]
    fn delete_out_of_range_is_invalid_index() {
        let mut model = Model::default();
        let err = DeletePrescription { index: Index::from_zero_based(0) }
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_PRESCRIPTION_INDEX);
    }
}
