//! Appointments.

use medbook_core::{Identity, PersonId, ValueObject, same_value};

use crate::fields::AppointmentTime;

/// A scheduled meeting between a patient and a doctor.
///
/// Compared by full value; the same pair may meet at different times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    patient_id: PersonId,
    doctor_id: PersonId,
    time: AppointmentTime,
}

impl Appointment {
    pub fn new(patient_id: PersonId, doctor_id: PersonId, time: AppointmentTime) -> Self {
        Self {
            patient_id,
            doctor_id,
            time,
        }
    }

    pub fn patient_id(&self) -> PersonId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> PersonId {
        self.doctor_id
    }

    pub fn time(&self) -> AppointmentTime {
        self.time
    }

    /// True if `person` takes part in this appointment, as patient or doctor.
    pub fn involves(&self, person: PersonId) -> bool {
        self.patient_id == person || self.doctor_id == person
    }
}

impl ValueObject for Appointment {}

impl Identity for Appointment {
    fn same_identity(&self, other: &Self) -> bool {
        same_value(self, other)
    }
}

impl core::fmt::Display for Appointment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Patient ID: {} Doctor ID: {} Time: {}",
            self.patient_id, self.doctor_id, self.time
        )
    }
}
