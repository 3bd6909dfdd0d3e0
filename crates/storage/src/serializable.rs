//! Whole-book JSON document.

use medbook_core::{PersonId, UniqueList};
use medbook_model::BookSnapshot;
use serde::{Deserialize, Serialize};

use crate::adapted::{
    JsonAdaptedAppointment, JsonAdaptedDoctor, JsonAdaptedMedHist, JsonAdaptedPatient,
    JsonAdaptedPrescription, required,
};
use crate::error::StorageError;

pub const MESSAGE_DUPLICATE_PATIENT: &str = "Patients list contains duplicate patient(s).";
pub const MESSAGE_DUPLICATE_DOCTOR: &str = "Doctors list contains duplicate doctor(s).";
pub const MESSAGE_DUPLICATE_MED_HIST: &str =
    "Medical histories list contains duplicate medical history(s).";
pub const MESSAGE_DUPLICATE_PRESCRIPTION: &str =
    "Prescriptions list contains duplicate prescription(s).";
pub const MESSAGE_DUPLICATE_APPOINTMENT: &str =
    "Appointments list contains duplicate appointment(s).";

/// The on-disk shape of a [`BookSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSerializableBook {
    pub next_person_id: Option<String>,
    #[serde(default)]
    pub patients: Vec<JsonAdaptedPatient>,
    #[serde(default)]
    pub doctors: Vec<JsonAdaptedDoctor>,
    #[serde(default)]
    pub med_hists: Vec<JsonAdaptedMedHist>,
    #[serde(default)]
    pub prescriptions: Vec<JsonAdaptedPrescription>,
    #[serde(default)]
    pub appointments: Vec<JsonAdaptedAppointment>,
}

fn ensure_unique<T: medbook_core::Identity>(
    items: &[T],
    message: &'static str,
) -> Result<(), StorageError> {
    if UniqueList::elements_are_unique(items) {
        Ok(())
    } else {
        Err(StorageError::DuplicateRecords(message))
    }
}

impl JsonSerializableBook {
    pub fn from_snapshot(source: &BookSnapshot) -> Self {
        Self {
            next_person_id: Some(source.next_person_id.to_string()),
            patients: source.patients.iter().map(JsonAdaptedPatient::from_model).collect(),
            doctors: source.doctors.iter().map(JsonAdaptedDoctor::from_model).collect(),
            med_hists: source.med_hists.iter().map(JsonAdaptedMedHist::from_model).collect(),
            prescriptions: source
                .prescriptions
                .iter()
                .map(JsonAdaptedPrescription::from_model)
                .collect(),
            appointments: source
                .appointments
                .iter()
                .map(JsonAdaptedAppointment::from_model)
                .collect(),
        }
    }

    /// Converts every record, failing on the first invalid field or duplicate.
    ///
    /// Nothing is returned unless the whole document is valid.
    pub fn to_snapshot(&self) -> Result<BookSnapshot, StorageError> {
        let next_person_id: PersonId =
            required(&self.next_person_id, "Record book", "NextPersonId")?;

        let patients = self
            .patients
            .iter()
            .map(JsonAdaptedPatient::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(&patients, MESSAGE_DUPLICATE_PATIENT)?;

        let doctors = self
            .doctors
            .iter()
            .map(JsonAdaptedDoctor::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(&doctors, MESSAGE_DUPLICATE_DOCTOR)?;

        let med_hists = self
            .med_hists
            .iter()
            .map(JsonAdaptedMedHist::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(&med_hists, MESSAGE_DUPLICATE_MED_HIST)?;

        let prescriptions = self
            .prescriptions
            .iter()
            .map(JsonAdaptedPrescription::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(&prescriptions, MESSAGE_DUPLICATE_PRESCRIPTION)?;

        let appointments = self
            .appointments
            .iter()
            .map(JsonAdaptedAppointment::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(&appointments, MESSAGE_DUPLICATE_APPOINTMENT)?;

        Ok(BookSnapshot {
            patients,
            doctors,
            med_hists,
            prescriptions,
            appointments,
            next_person_id,
        })
    }
}
