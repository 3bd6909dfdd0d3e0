//! JSON file storage for the record book.

use std::fs;
use std::path::{Path, PathBuf};

use medbook_model::BookSnapshot;

use crate::error::StorageError;
use crate::serializable::JsonSerializableBook;

/// Storage boundary for the whole record book.
///
/// Reads happen once at start-up; saves after every committed command.
pub trait BookStorage {
    fn file_path(&self) -> &Path;

    /// Returns `Ok(None)` when there is no data file yet.
    fn read_book(&self) -> Result<Option<BookSnapshot>, StorageError>;

    fn save_book(&self, snapshot: &BookSnapshot) -> Result<(), StorageError>;
}

/// Stores the book as a pretty-printed JSON document at `path`.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    path: PathBuf,
}

impl JsonBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStorage for JsonBookStorage {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read_book(&self) -> Result<Option<BookSnapshot>, StorageError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "data file not found");
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let document: JsonSerializableBook =
            serde_json::from_str(&text).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;

        let snapshot = document.to_snapshot()?;
        tracing::info!(
            path = %self.path.display(),
            patients = snapshot.patients.len(),
            doctors = snapshot.doctors.len(),
            "loaded record book"
        );
        Ok(Some(snapshot))
    }

    /// Writes to a sibling temp file first, then renames it over the target.
    fn save_book(&self, snapshot: &BookSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let document = JsonSerializableBook::from_snapshot(snapshot);
        let text = serde_json::to_string_pretty(&document).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let temp = self.temp_path();
        fs::write(&temp, text).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "saved record book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializable::{MESSAGE_DUPLICATE_PATIENT, MESSAGE_DUPLICATE_PRESCRIPTION};
    use medbook_core::PersonId;
    use medbook_model::{
        Appointment, ClinicBook, Doctor, DoctorDetails, MedicalHistory, Patient, PatientDetails,
        Prescription,
    };
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn patient(id: u32, name: &str, phone: &str) -> Patient {
        Patient::new(
            PersonId::new(id),
            PatientDetails {
                name: name.parse().unwrap(),
                phone: phone.parse().unwrap(),
                gender: "M".parse().unwrap(),
                age: "45".parse().unwrap(),
                address: "311, Clementi Ave 2, #02-25".parse().unwrap(),
                tags: ["friends".parse().unwrap()].into_iter().collect(),
            },
        )
    }

    fn doctor(id: u32, name: &str, phone: &str) -> Doctor {
        Doctor::new(
            PersonId::new(id),
            DoctorDetails {
                name: name.parse().unwrap(),
                phone: phone.parse().unwrap(),
                address: "Seattle Grace".parse().unwrap(),
                specialisations: ["surgery".parse().unwrap()].into_iter().collect(),
            },
        )
    }

    fn typical_book() -> BookSnapshot {
        let mut book = ClinicBook::new();
        book.add_patient(patient(1, "Alice Pauline", "94351253")).unwrap();
        book.add_doctor(doctor(2, "Meredith Grey", "81234567")).unwrap();
        book.add_med_hist(MedicalHistory::new(
            PersonId::new(1),
            PersonId::new(2),
            "2019-10-10".parse().unwrap(),
            "Sore throat".parse().unwrap(),
        ))
        .unwrap();
        book.add_prescription(Prescription::new(
            "Acetaminophen".parse().unwrap(),
            "500 mg, for relieving pain".parse().unwrap(),
        ))
        .unwrap();
        book.add_appointment(Appointment::new(
            PersonId::new(1),
            PersonId::new(2),
            "2019-10-23 16:00".parse().unwrap(),
        ))
        .unwrap();
        book.snapshot()
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonBookStorage::new(dir.path().join("absent.json"));
        assert!(storage.read_book().unwrap().is_none());
    }

    #[test]
    fn save_then_read_round_trips() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonBookStorage::new(dir.path().join("nested").join("medbook.json"));
        let original = typical_book();

        storage.save_book(&original).unwrap();
        let read_back = storage.read_book().unwrap().unwrap();

        assert_eq!(read_back, original);
        assert!(!storage.temp_path().exists());
    }

    #[test]
    fn overwrite_replaces_previous_contents() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonBookStorage::new(dir.path().join("medbook.json"));
        storage.save_book(&typical_book()).unwrap();
        storage.save_book(&BookSnapshot::default()).unwrap();

        assert_eq!(storage.read_book().unwrap().unwrap(), BookSnapshot::default());
    }

    #[test]
    fn duplicate_patients_reject_the_whole_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("dup.json");
        let mut snapshot = typical_book();
        snapshot.patients.push(patient(9, "Alice Pauline", "94351253"));
        let text = serde_json::to_string(&JsonSerializableBook::from_snapshot(&snapshot)).unwrap();
        fs::write(&path, text).unwrap();

        let err = JsonBookStorage::new(&path).read_book().unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PATIENT);
    }

    #[test]
    fn duplicate_prescriptions_are_rejected() {
        let mut snapshot = typical_book();
        let extra = snapshot.prescriptions[0].clone();
        snapshot.prescriptions.push(extra);

        let err = JsonSerializableBook::from_snapshot(&snapshot).to_snapshot().unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PRESCRIPTION);
    }

    #[test]
    fn missing_patient_field_is_reported() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing.json");
        fs::write(
            &path,
            r#"{"nextPersonId":"2","patients":[{"id":"1","name":"Alice","gender":"F","age":"3","address":"x"}]}"#,
        )
        .unwrap();

        let err = JsonBookStorage::new(&path).read_book().unwrap_err();
        assert_eq!(err.to_string(), "Patient's Phone field is missing!");
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonBookStorage::new(&path).read_book().unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        })]

        /// Property: any book built through valid operations survives save + read.
        #[test]
        fn round_trip_preserves_snapshot(
            people in prop::collection::vec(("[A-Za-z][A-Za-z0-9 ]{0,15}", "[0-9]{3,10}", any::<bool>()), 0..8),
            visits in prop::collection::vec((1u32..10, 1u32..10, 1u32..=12, 1u32..=28, "[A-Za-z][A-Za-z0-9 ]{0,20}"), 0..6),
            medicines in prop::collection::vec(("[A-Za-z][A-Za-z0-9 ]{0,12}", "[a-z0-9][a-z0-9 ,]{0,20}"), 0..6),
            slots in prop::collection::vec((1u32..10, 1u32..10, 1u32..=28, 0u32..24, 0u32..60), 0..6),
        ) {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let storage = JsonBookStorage::new(dir.path().join("medbook.json"));

            let mut book = ClinicBook::new();
            for (name, phone, is_doctor) in people {
                let id = book.next_person_id();
                let _ = if is_doctor {
                    book.add_doctor(doctor(id.value(), &name, &phone))
                } else {
                    book.add_patient(patient(id.value(), &name, &phone))
                };
            }
            for (pid, did, month, day, write_up) in visits {
                let _ = book.add_med_hist(MedicalHistory::new(
                    PersonId::new(pid),
                    PersonId::new(did),
                    format!("2019-{month:02}-{day:02}").parse().unwrap(),
                    write_up.parse().unwrap(),
                ));
            }
            for (name, description) in medicines {
                let _ = book.add_prescription(Prescription::new(
                    name.parse().unwrap(),
                    description.parse().unwrap(),
                ));
            }
            for (pid, did, day, hour, minute) in slots {
                let _ = book.add_appointment(Appointment::new(
                    PersonId::new(pid),
                    PersonId::new(did),
                    format!("2019-10-{day:02} {hour:02}:{minute:02}").parse().unwrap(),
                ));
            }
            let snapshot = book.snapshot();

            storage.save_book(&snapshot).unwrap();
            prop_assert_eq!(storage.read_book().unwrap().unwrap(), snapshot);
        }
    }
}
