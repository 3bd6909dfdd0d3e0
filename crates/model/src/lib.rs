//! `medbook-model` — records, the record book and its undo history.
//!
//! Pure in-memory logic: no IO. Persistence and command parsing live in
//! `medbook-storage` and `medbook-logic`.

pub mod appointment;
pub mod book;
pub mod doctor;
pub mod fields;
pub mod history;
pub mod medical_history;
pub mod model;
pub mod patient;
pub mod prescription;

pub use appointment::Appointment;
pub use book::{BookChange, BookChangeEnvelope, BookChanged, BookSnapshot, ClinicBook, RecordKind};
pub use doctor::{Doctor, DoctorDetails};
pub use fields::{
    Address, Age, AppointmentTime, Description, Gender, MedicineName, Name, Phone, RecordDate,
    Specialisation, Tag, WriteUp,
};
pub use history::{DEFAULT_HISTORY_LIMIT, History, HistoryError};
pub use medical_history::MedicalHistory;
pub use model::{Model, ModelError, Predicate};
pub use patient::{Patient, PatientDetails};
pub use prescription::Prescription;
