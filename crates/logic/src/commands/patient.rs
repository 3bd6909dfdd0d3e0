//! Patient commands.

use std::collections::BTreeSet;

use medbook_core::Identity;
use medbook_model::{Address, Age, Gender, Model, Name, Patient, PatientDetails, Phone, Tag};

use super::{CommandResult, pick_displayed};
use crate::error::CommandError;
use crate::index::Index;

pub const ADD_PATIENT_USAGE: &str = "add-patient: Adds a patient to the records. \
Parameters: n/NAME g/GENDER as/AGE p/PHONE a/ADDRESS [t/TAG]...\n\
Example: add-patient n/John Doe g/M as/30 p/98765432 a/311, Clementi Ave 2, #02-25 t/diabetic";
pub const EDIT_PATIENT_USAGE: &str = "edit-patient: Edits the patient at the given index of the displayed list. \
Existing values are overwritten; t/ with no value removes all tags. \
Parameters: INDEX [n/NAME] [g/GENDER] [as/AGE] [p/PHONE] [a/ADDRESS] [t/TAG]...\n\
Example: edit-patient 1 p/91234567 as/31";
pub const DELETE_PATIENT_USAGE: &str = "delete-patient: Deletes the patient at the given index of the displayed list. \
Parameters: INDEX\nExample: delete-patient 1";
pub const LIST_PATIENT_USAGE: &str = "list-patient: Lists all patients.";
pub const SEARCH_PATIENT_USAGE: &str = "search-patient: Finds patients whose names contain any of the keywords \
(case-insensitive, whole words). Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: search-patient alice bob";
pub const SEARCH_PATIENT_TAG_USAGE: &str = "search-patient-tag: Finds patients carrying any of the tags. \
Parameters: TAG [MORE_TAGS]...\nExample: search-patient-tag diabetic";
pub const SELECT_USAGE: &str = "select: Selects the patient at the given index of the displayed list. \
Parameters: INDEX\nExample: select 1";

pub const MESSAGE_DUPLICATE_PATIENT: &str = "This patient already exists in the records";
pub const MESSAGE_INVALID_PATIENT_INDEX: &str = "The patient index provided is invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPatient {
    pub details: PatientDetails,
}

impl AddPatient {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let patient = Patient::new(model.book().next_person_id(), self.details);
        if model.book().has_patient(&patient) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_PATIENT));
        }

        model.commit(|book| book.add_patient(patient.clone()))?;
        tracing::info!(id = %patient.id(), "patient added");
        Ok(CommandResult::new(format!("New patient added: {patient}")))
    }
}

/// Fields to overwrite on an existing patient. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub gender: Option<Gender>,
    pub age: Option<Age>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.gender.is_some()
            || self.age.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn apply(self, current: &PatientDetails) -> PatientDetails {
        PatientDetails {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            gender: self.gender.unwrap_or(current.gender),
            age: self.age.unwrap_or(current.age),
            address: self.address.unwrap_or_else(|| current.address.clone()),
            tags: self.tags.unwrap_or_else(|| current.tags.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPatient {
    pub index: Index,
    pub descriptor: EditPatientDescriptor,
}

impl EditPatient {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_patients(),
            self.index,
            MESSAGE_INVALID_PATIENT_INDEX,
        )?;
        let edited = target.with_details(self.descriptor.apply(target.details()));

        if !target.same_identity(&edited) && model.book().has_patient(&edited) {
            return Err(CommandError::Duplicate(MESSAGE_DUPLICATE_PATIENT));
        }

        model.commit(|book| book.set_patient(&target, edited.clone()))?;
        model.show_all_patients();
        tracing::info!(id = %edited.id(), "patient edited");
        Ok(CommandResult::new(format!("Edited Patient: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePatient {
    pub index: Index,
}

impl DeletePatient {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_patients(),
            self.index,
            MESSAGE_INVALID_PATIENT_INDEX,
        )?;
        let removed = model.commit(|book| book.remove_patient(&target))?;
        tracing::info!(id = %removed.id(), "patient deleted");
        Ok(CommandResult::new(format!("Deleted Patient: {removed}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPatients;

impl ListPatients {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        model.show_all_patients();
        CommandResult::new("Listed all patients")
    }
}

/// Shows patients whose name contains any keyword as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPatients {
    pub keywords: Vec<String>,
}

impl SearchPatients {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        let keywords = self.keywords;
        model.filter_patients(move |p| p.name().matches_any_word(&keywords));
        CommandResult::new(format!("{} patients listed!", model.filtered_patients().len()))
    }
}

/// Shows patients carrying any of the tags (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPatientsByTag {
    pub tags: Vec<Tag>,
}

impl SearchPatientsByTag {
    pub fn execute(self, model: &mut Model) -> CommandResult {
        let wanted = self.tags;
        model.filter_patients(move |p| {
            p.tags()
                .iter()
                .any(|tag| wanted.iter().any(|w| w.as_str().eq_ignore_ascii_case(tag.as_str())))
        });
        CommandResult::new(format!("{} patients listed!", model.filtered_patients().len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPatient {
    pub index: Index,
}

impl SelectPatient {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = pick_displayed(
            model.filtered_patients(),
            self.index,
            MESSAGE_INVALID_PATIENT_INDEX,
        )?;
        model.select_patient(Some(target));
        Ok(CommandResult::new(format!("Selected Patient: {}", self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_core::{DomainError, PersonId};

    fn details(name: &str, phone: &str) -> PatientDetails {
        PatientDetails {
            name: name.parse().unwrap(),
            phone: phone.parse().unwrap(),
            gender: "F".parse().unwrap(),
            age: "30".parse().unwrap(),
            address: "123, Jurong West Ave 6".parse().unwrap(),
            tags: BTreeSet::new(),
        }
    }

    fn add(model: &mut Model, name: &str, phone: &str) {
        AddPatient { details: details(name, phone) }.execute(model).unwrap();
    }

    fn first() -> Index {
        Index::from_zero_based(0)
    }

    #[test]
    fn add_assigns_store_ids_and_rejects_duplicates() {
        let mut model = Model::default();
        add(&mut model, "Alice Pauline", "94351253");
        add(&mut model, "Benson Meier", "98765432");

        let ids: Vec<PersonId> = model.book().patients().iter().map(Patient::id).collect();
        assert_eq!(ids, vec![PersonId::new(1), PersonId::new(2)]);

        let err = AddPatient { details: details("Alice Pauline", "94351253") }
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::Duplicate(MESSAGE_DUPLICATE_PATIENT));
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PATIENT);
        assert_eq!(model.book().patients().len(), 2);
    }

    #[test]
    fn edit_keeps_id_and_overwrites_fields() {
        let mut model = Model::default();
        add(&mut model, "Alice Pauline", "94351253");

        let descriptor = EditPatientDescriptor {
            phone: Some("91234567".parse().unwrap()),
            tags: Some(["diabetic".parse().unwrap()].into_iter().collect()),
            ..EditPatientDescriptor::default()
        };
        EditPatient { index: first(), descriptor }.execute(&mut model).unwrap();

        let edited = &model.book().patients()[0];
        assert_eq!(edited.id(), PersonId::new(1));
        assert_eq!(edited.phone().as_str(), "91234567");
        assert_eq!(edited.name().as_str(), "Alice Pauline");
        assert_eq!(edited.tags().len(), 1);
    }

    #[test]
    fn edit_into_existing_identity_is_a_duplicate() {
        let mut model = Model::default();
        add(&mut model, "Alice", "111");
        add(&mut model, "Bob", "222");

        let descriptor = EditPatientDescriptor {
            name: Some("Bob".parse().unwrap()),
            phone: Some("222".parse().unwrap()),
            ..EditPatientDescriptor::default()
        };
        let err = EditPatient { index: first(), descriptor }.execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::Duplicate(MESSAGE_DUPLICATE_PATIENT));
    }

    #[test]
    fn index_counts_over_the_displayed_list() {
        let mut model = Model::default();
        add(&mut model, "Alice", "111");
        add(&mut model, "Bob", "222");
        SearchPatients { keywords: vec!["bob".into()] }.execute(&mut model);

        let result = DeletePatient { index: first() }.execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("Deleted Patient: Bob"));

        let err = DeletePatient { index: Index::from_zero_based(1) }
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_PATIENT_INDEX);
    }

    #[test]
    fn search_matches_whole_words_case_insensitively() {
        let mut model = Model::default();
        add(&mut model, "Alice Pauline", "111");
        add(&mut model, "Paul Tan", "222");

        let result = SearchPatients { keywords: vec!["PAUL".into()] }.execute(&mut model);
        assert_eq!(result.feedback, "1 patients listed!");
        assert_eq!(model.filtered_patients()[0].name().as_str(), "Paul Tan");
    }

    #[test]
    fn tag_search_and_list_reset() {
        let mut model = Model::default();
        let mut tagged = details("Alice", "111");
        tagged.tags.insert("Diabetic".parse().unwrap());
        AddPatient { details: tagged }.execute(&mut model).unwrap();
        add(&mut model, "Bob", "222");

        SearchPatientsByTag { tags: vec!["diabetic".parse().unwrap()] }.execute(&mut model);
        assert_eq!(model.filtered_patients().len(), 1);

        ListPatients.execute(&mut model);
        assert_eq!(model.filtered_patients().len(), 2);
    }

    #[test]
    fn select_remembers_patient_until_deleted() {
        let mut model = Model::default();
        add(&mut model, "Alice", "111");

        SelectPatient { index: first() }.execute(&mut model).unwrap();
        assert_eq!(model.selected_patient().map(|p| p.name().as_str()), Some("Alice"));

        DeletePatient { index: first() }.execute(&mut model).unwrap();
        assert!(model.selected_patient().is_none());
    }

    #[test]
    fn failed_delete_leaves_no_history() {
        let mut model = Model::default();
        let err = DeletePatient { index: first() }.execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex(MESSAGE_INVALID_PATIENT_INDEX));
        assert!(!model.can_undo());
        assert_ne!(err, CommandError::Domain(DomainError::ElementNotFound));
    }
}
