//! Serde-friendly mirrors of the model records.
//!
//! Every field is kept as an optional string so that a missing field can be
//! reported by name, and every value goes back through the same `FromStr`
//! validation the command parser uses before a model record is built.

use core::str::FromStr;

use medbook_core::{DomainError, PersonId};
use medbook_model::{
    Address, Age, Appointment, AppointmentTime, Description, Doctor, DoctorDetails, Gender,
    MedicalHistory, MedicineName, Name, Patient, PatientDetails, Phone, Prescription, RecordDate,
    Specialisation, Tag, WriteUp,
};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Parses a required field, naming it in the error when absent.
pub(crate) fn required<T>(
    value: &Option<String>,
    entity: &'static str,
    field: &'static str,
) -> Result<T, StorageError>
where
    T: FromStr<Err = DomainError>,
{
    let raw = value
        .as_deref()
        .ok_or(StorageError::MissingField { entity, field })?;
    Ok(raw.parse::<T>()?)
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>, StorageError>
where
    T: FromStr<Err = DomainError>,
{
    values
        .iter()
        .map(|raw| raw.parse::<T>().map_err(StorageError::from))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPatient {
    pub id: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub tagged: Vec<String>,
}

impl JsonAdaptedPatient {
    const ENTITY: &'static str = "Patient";

    pub fn from_model(source: &Patient) -> Self {
        Self {
            id: Some(source.id().to_string()),
            name: Some(source.name().to_string()),
            gender: Some(source.gender().to_string()),
            age: Some(source.age().to_string()),
            phone: Some(source.phone().to_string()),
            address: Some(source.address().to_string()),
            tagged: source.tags().iter().map(ToString::to_string).collect(),
        }
    }

    pub fn to_model(&self) -> Result<Patient, StorageError> {
        let tags = parse_all::<Tag>(&self.tagged)?;

        let id: PersonId = required(&self.id, Self::ENTITY, "Id")?;
        let name: Name = required(&self.name, Self::ENTITY, "Name")?;
        let gender: Gender = required(&self.gender, Self::ENTITY, "Gender")?;
        let age: Age = required(&self.age, Self::ENTITY, "Age")?;
        let phone: Phone = required(&self.phone, Self::ENTITY, "Phone")?;
        let address: Address = required(&self.address, Self::ENTITY, "Address")?;

        Ok(Patient::new(
            id,
            PatientDetails {
                name,
                phone,
                gender,
                age,
                address,
                tags: tags.into_iter().collect(),
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedDoctor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub specialisations: Vec<String>,
}

impl JsonAdaptedDoctor {
    const ENTITY: &'static str = "Doctor";

    pub fn from_model(source: &Doctor) -> Self {
        Self {
            id: Some(source.id().to_string()),
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            address: Some(source.address().to_string()),
            specialisations: source.specialisations().iter().map(ToString::to_string).collect(),
        }
    }

    pub fn to_model(&self) -> Result<Doctor, StorageError> {
        let specialisations = parse_all::<Specialisation>(&self.specialisations)?;

        let id: PersonId = required(&self.id, Self::ENTITY, "Id")?;
        let name: Name = required(&self.name, Self::ENTITY, "Name")?;
        let phone: Phone = required(&self.phone, Self::ENTITY, "Phone")?;
        let address: Address = required(&self.address, Self::ENTITY, "Address")?;

        Ok(Doctor::new(
            id,
            DoctorDetails {
                name,
                phone,
                address,
                specialisations: specialisations.into_iter().collect(),
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedMedHist {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub date: Option<String>,
    pub write_up: Option<String>,
}

impl JsonAdaptedMedHist {
    const ENTITY: &'static str = "Medical history";

    pub fn from_model(source: &MedicalHistory) -> Self {
        Self {
            patient_id: Some(source.patient_id().to_string()),
            doctor_id: Some(source.doctor_id().to_string()),
            date: Some(source.date().to_string()),
            write_up: Some(source.write_up().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<MedicalHistory, StorageError> {
        let patient_id: PersonId = required(&self.patient_id, Self::ENTITY, "PatientId")?;
        let doctor_id: PersonId = required(&self.doctor_id, Self::ENTITY, "DoctorId")?;
        let date: RecordDate = required(&self.date, Self::ENTITY, "Date")?;
        let write_up: WriteUp = required(&self.write_up, Self::ENTITY, "WriteUp")?;
        Ok(MedicalHistory::new(patient_id, doctor_id, date, write_up))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPrescription {
    pub medicine_name: Option<String>,
    pub description: Option<String>,
}

impl JsonAdaptedPrescription {
    const ENTITY: &'static str = "Prescription";

    pub fn from_model(source: &Prescription) -> Self {
        Self {
            medicine_name: Some(source.medicine_name().to_string()),
            description: Some(source.description().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<Prescription, StorageError> {
        let name: MedicineName = required(&self.medicine_name, Self::ENTITY, "MedicineName")?;
        let description: Description = required(&self.description, Self::ENTITY, "Description")?;
        Ok(Prescription::new(name, description))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedAppointment {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub time: Option<String>,
}

impl JsonAdaptedAppointment {
    const ENTITY: &'static str = "Appointment";

    pub fn from_model(source: &Appointment) -> Self {
        Self {
            patient_id: Some(source.patient_id().to_string()),
            doctor_id: Some(source.doctor_id().to_string()),
            time: Some(source.time().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<Appointment, StorageError> {
        let patient_id: PersonId = required(&self.patient_id, Self::ENTITY, "PatientId")?;
        let doctor_id: PersonId = required(&self.doctor_id, Self::ENTITY, "DoctorId")?;
        let time: AppointmentTime = required(&self.time, Self::ENTITY, "Time")?;
        Ok(Appointment::new(patient_id, doctor_id, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_model::fields::{AGE_CONSTRAINTS, NAME_CONSTRAINTS, TAG_CONSTRAINTS};

    fn valid_patient() -> JsonAdaptedPatient {
        JsonAdaptedPatient {
            id: Some("1".into()),
            name: Some("Benson Meier".into()),
            gender: Some("M".into()),
            age: Some("45".into()),
            phone: Some("98765432".into()),
            address: Some("311, Clementi Ave 2, #02-25".into()),
            tagged: vec!["owesMoney".into(), "friends".into()],
        }
    }

    #[test]
    fn valid_patient_converts_with_sorted_tags() {
        let patient = valid_patient().to_model().unwrap();
        assert_eq!(patient.name().as_str(), "Benson Meier");

        let back = JsonAdaptedPatient::from_model(&patient);
        assert_eq!(back.tagged, vec!["friends".to_string(), "owesMoney".to_string()]);
    }

    #[test]
    fn missing_name_is_named() {
        let adapted = JsonAdaptedPatient {
            name: None,
            ..valid_patient()
        };
        let err = adapted.to_model().unwrap_err();
        assert_eq!(err.to_string(), "Patient's Name field is missing!");
    }

    #[test]
    fn invalid_values_report_parser_constraints() {
        let bad_name = JsonAdaptedPatient {
            name: Some("R@chel".into()),
            ..valid_patient()
        };
        assert_eq!(bad_name.to_model().unwrap_err().to_string(), NAME_CONSTRAINTS);

        let bad_age = JsonAdaptedPatient {
            age: Some("abc".into()),
            ..valid_patient()
        };
        assert_eq!(bad_age.to_model().unwrap_err().to_string(), AGE_CONSTRAINTS);

        let bad_tag = JsonAdaptedPatient {
            tagged: vec!["#friend".into()],
            ..valid_patient()
        };
        assert_eq!(bad_tag.to_model().unwrap_err().to_string(), TAG_CONSTRAINTS);
    }

    #[test]
    fn missing_med_hist_date_is_named() {
        let adapted = JsonAdaptedMedHist {
            patient_id: Some("1".into()),
            doctor_id: Some("2".into()),
            date: None,
            write_up: Some("Fever".into()),
        };
        assert_eq!(
            adapted.to_model().unwrap_err().to_string(),
            "Medical history's Date field is missing!"
        );
    }
}
