//! Medical history entries.

use medbook_core::{Entity, Identity, PersonId};

use crate::fields::{RecordDate, WriteUp};

/// A write-up of one consultation between a patient and a doctor on a date.
///
/// `patient_id` and `doctor_id` are plain references; nothing checks that
/// the patient or doctor still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalHistory {
    patient_id: PersonId,
    doctor_id: PersonId,
    date: RecordDate,
    write_up: WriteUp,
}

impl MedicalHistory {
    pub fn new(patient_id: PersonId, doctor_id: PersonId, date: RecordDate, write_up: WriteUp) -> Self {
        Self {
            patient_id,
            doctor_id,
            date,
            write_up,
        }
    }

    pub fn patient_id(&self) -> PersonId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> PersonId {
        self.doctor_id
    }

    pub fn date(&self) -> RecordDate {
        self.date
    }

    pub fn write_up(&self) -> &WriteUp {
        &self.write_up
    }

    /// Composite key, `"{patient_id}/{doctor_id}/{date}"`.
    pub fn med_hist_id(&self) -> String {
        format!("{}/{}/{}", self.patient_id, self.doctor_id, self.date)
    }
}

impl Identity for MedicalHistory {
    fn same_identity(&self, other: &Self) -> bool {
        self.patient_id == other.patient_id
            && self.doctor_id == other.doctor_id
            && self.date == other.date
    }
}

impl Entity for MedicalHistory {
    type Key = String;

    fn identity_key(&self) -> Self::Key {
        self.med_hist_id()
    }
}

impl core::fmt::Display for MedicalHistory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Medical History ID: {} Patient ID: {} Doctor ID: {} Date: {} WriteUp: {}",
            self.med_hist_id(),
            self.patient_id,
            self.doctor_id,
            self.date,
            self.write_up
        )
    }
}
