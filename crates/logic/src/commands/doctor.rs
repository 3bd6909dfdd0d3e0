//! Doctor commands.

use std::collections::BTreeSet;

use medbook_core::Identity;
use medbook_model::{Address, Doctor, DoctorDetails, Model, Name, Phone, Specialisation};

use super::{CommandResult, pick_displayed};
use crate::error::CommandError;
use crate::index::Index;

pub const ADD_DOCTOR_USAGE: &str = "add-doctor: Adds a doctor to the records. \
Parameters: n/NAME p/PHONE a/ADDRESS [s/SPECIALISATION]...\n\
Example: add-doctor n/Meredith Grey p/81234567 a/Seattle Grace s/surgery";
pub const EDIT_DOCTOR_USAGE: &str = "edit-doctor: Edits the doctor at the given index of the displayed list. \
s/ with no value removes all specialisations. \
Parameters: INDEX [n/NAME] [p/PHONE] [a/ADDRESS] [s/SPECIALISATION]...\n\
Example: edit-doctor 1 a/Grey Sloan Memorial";
pub const DELETE_DOCTOR_USAGE: &str = "delete-doctor: Deletes the doctor at the given index of the displayed list. \
Parameters: INDEX\nExample: delete-doctor 1";
pub const LIST_DOCTOR_USAGE: &str = "list-doctor: Lists all doctors.";

pub const MESSAGE_DUPLICATE_DOCTOR: &str = "This doctor already exists in the records";
pub const MESSAGE_INVALID_DOCTOR_INDEX: &str = "The doctor index provided is invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDoctor {
    pub details: DoctorDetails,
}

impl AddDoctor {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let doctor = Doctor::new(model.book().next_person_id(), self.details);
        if model.book().has_doctor(&doctor) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_DOCTOR));
        }

        model.commit(|book| book.add_doctor(doctor.clone()))?;
        tracing::info!(id = %doctor.id(), "doctor added");
        Ok(CommandResult::new(format!("New doctor added: {doctor}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDoctorDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub address: Option<Address>,
    pub specialisations: Option<BTreeSet<Specialisation>>,
}

impl EditDoctorDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.specialisations.is_some()
    }

    pub fn apply(self, current: &DoctorDetails) -> DoctorDetails {
        DoctorDetails {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            address: self.address.unwrap_or_else(|| current.address.clone()),
            specialisations: self
                .specialisations
                .unwrap_or_else(|| current.specialisations.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDoctor {
    pub index: Index,
    pub descriptor: EditDoctorDescriptor,
}

impl EditDoctor {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target =
            pick_displayed(model.filtered_doctors(), self.index, MESSAGE_INVALID_DOCTOR_INDEX)?;
        let edited = target.with_details(self.descriptor.apply(target.details()));

        if !target.same_identity(&edited) && model.book().has_doctor(&edited) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_DOCTOR));
        }

        model.commit(|book| book.set_doctor(&target, edited.clone()))?;
        model.show_all_doctors();
        tracing::info!(id = %edited.id(), "doctor edited");
        Ok(CommandResult::new(format!("Edited Doctor: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDoctor {
    pub index: Index,
}

impl DeleteDoctor {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target =
            pick_displayed(model.filtered_doctors(), self.index, MESSAGE_INVALID_DOCTOR_INDEX)?;
        let removed = model.commit(|book| book.remove_doctor(&target))?;
        tracing::info!(id = %removed.id(), "doctor deleted");
        Ok(CommandResult::new(format!("Deleted Doctor: {removed}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDoctors;

impl ListDoctors {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        model.show_all_doctors();
        CommandResult::new("Listed all doctors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_core::PersonId;
    use medbook_model::{Patient, PatientDetails};

    fn details(name: &str, phone: &str) -> DoctorDetails {
        DoctorDetails {
            name: name.parse().unwrap(),
            phone: phone.parse().unwrap(),
            address: "Seattle Grace".parse().unwrap(),
            specialisations: ["surgery".parse().unwrap()].into_iter().collect(),
        }
    }

    #[test]
    fn doctors_share_the_person_id_sequence_with_patients() {
        let mut model = Model::default();
        model
            .commit(|book| {
                book.add_patient(Patient::new(
                    PersonId::new(1),
                    PatientDetails {
                        name: "Alice".parse().unwrap(),
                        phone: "111".parse().unwrap(),
                        gender: "F".parse().unwrap(),
                        age: "30".parse().unwrap(),
                        address: "x".parse().unwrap(),
                        tags: BTreeSet::new(),
                    },
                ))
            })
            .unwrap();

        AddDoctor { details: details("Meredith Grey", "81234567") }
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.book().doctors()[0].id(), PersonId::new(2));
    }

    #[test]
    fn duplicate_doctor_is_rejected() {
        let mut model = Model::default();
        AddDoctor { details: details("Meredith Grey", "81234567") }
            .execute(&mut model)
            .unwrap();
        let err = AddDoctor { details: details("Meredith Grey", "81234567") }
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::Duplicate(MESSAGE_DUPLICATE_DOCTOR));
    }

    #[test]
    fn empty_specialisations_clear_existing_ones() {
        let mut model = Model::default();
        AddDoctor { details: details("Meredith Grey", "81234567") }
            .execute(&mut model)
            .unwrap();

        let descriptor = EditDoctorDescriptor {
            specialisations: Some(BTreeSet::new()),
            ..EditDoctorDescriptor::default()
        };
        EditDoctor { index: Index::from_zero_based(0), descriptor }
            .execute(&mut model)
            .unwrap();
        assert!(model.book().doctors()[0].specialisations().is_empty());
    }

    #[test]
    fn delete_then_list() {
        let mut model = Model::default();
        AddDoctor { details: details("Meredith Grey", "81234567") }
            .execute(&mut model)
            .unwrap();
        DeleteDoctor { index: Index::from_zero_based(0) }.execute(&mut model).unwrap();
        assert_eq!(ListDoctors.execute(&mut model).feedback, "Listed all doctors");
        assert!(model.filtered_doctors().is_empty());
    }
}
