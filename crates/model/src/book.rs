//! The record book: one identity-checked collection per record kind.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use medbook_core::{DomainResult, Identity, PersonId, UniqueList};
use medbook_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::appointment::Appointment;
use crate::doctor::Doctor;
use crate::medical_history::MedicalHistory;
use crate::patient::Patient;
use crate::prescription::Prescription;

/// Record kinds held by the book.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patient,
    Doctor,
    MedicalHistory,
    Prescription,
    Appointment,
}

/// What a committed mutation did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BookChange {
    Added(RecordKind),
    Removed(RecordKind),
    Updated(RecordKind),
    /// Every collection was replaced at once (undo, redo, clear, load).
    Reset,
}

/// Notification published after every successful mutation of a [`ClinicBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanged {
    pub change: BookChange,
    pub occurred_at: DateTime<Utc>,
}

impl Event for BookChanged {
    fn event_type(&self) -> &'static str {
        use BookChange as C;
        use RecordKind as K;

        match self.change {
            C::Added(K::Patient) => "book.patient.added",
            C::Added(K::Doctor) => "book.doctor.added",
            C::Added(K::MedicalHistory) => "book.medical_history.added",
            C::Added(K::Prescription) => "book.prescription.added",
            C::Added(K::Appointment) => "book.appointment.added",
            C::Removed(K::Patient) => "book.patient.removed",
            C::Removed(K::Doctor) => "book.doctor.removed",
            C::Removed(K::MedicalHistory) => "book.medical_history.removed",
            C::Removed(K::Prescription) => "book.prescription.removed",
            C::Removed(K::Appointment) => "book.appointment.removed",
            C::Updated(K::Patient) => "book.patient.updated",
            C::Updated(K::Doctor) => "book.doctor.updated",
            C::Updated(K::MedicalHistory) => "book.medical_history.updated",
            C::Updated(K::Prescription) => "book.prescription.updated",
            C::Updated(K::Appointment) => "book.appointment.updated",
            C::Reset => "book.reset",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

pub type BookChangeEnvelope = EventEnvelope<BookChanged>;

#[derive(Debug, Default)]
struct FeedInner {
    bus: InMemoryEventBus<BookChangeEnvelope>,
    sequence: AtomicU64,
}

/// Publisher side of a book's change notifications.
#[derive(Debug, Clone, Default)]
pub struct ChangeFeed {
    inner: Arc<FeedInner>,
}

impl ChangeFeed {
    pub fn subscribe(&self) -> Subscription<BookChangeEnvelope> {
        self.inner.bus.subscribe()
    }

    fn publish(&self, change: BookChange) {
        let sequence = self.inner.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let envelope = EventEnvelope::wrap(
            sequence,
            BookChanged {
                change,
                occurred_at: Utc::now(),
            },
        );
        tracing::trace!(event = envelope.event_type(), sequence, "publishing book change");

        // The mutation is already committed; a failed notification must not undo it.
        if let Err(err) = self.inner.bus.publish(envelope) {
            tracing::warn!(?err, "failed to publish book change");
        }
    }
}

/// Plain, fully comparable copy of a book's contents.
///
/// Snapshots are what the undo/redo history stores and what the storage
/// layer reads and writes. Unlike [`ClinicBook`] equality, snapshot equality
/// covers every collection and the id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSnapshot {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub med_hists: Vec<MedicalHistory>,
    pub prescriptions: Vec<Prescription>,
    pub appointments: Vec<Appointment>,
    pub next_person_id: PersonId,
}

impl Default for BookSnapshot {
    fn default() -> Self {
        Self {
            patients: Vec::new(),
            doctors: Vec::new(),
            med_hists: Vec::new(),
            prescriptions: Vec::new(),
            appointments: Vec::new(),
            next_person_id: PersonId::FIRST,
        }
    }
}

/// Generates the membership, removal and replacement operations of one collection.
macro_rules! collection_ops {
    ($ty:ty, $kind:ident, $field:ident, $view:ident, $has:ident, $remove:ident, $set:ident) => {
        pub fn $view(&self) -> &[$ty] {
            self.$field.as_slice()
        }

        /// Returns true if a record with the same identity is stored.
        pub fn $has(&self, item: &$ty) -> bool {
            self.$field.contains(item)
        }

        /// Removes the stored record with the same identity as `item`.
        pub fn $remove(&mut self, item: &$ty) -> DomainResult<$ty> {
            let removed = self.$field.remove(item)?;
            self.changes.publish(BookChange::Removed(RecordKind::$kind));
            Ok(removed)
        }

        /// Replaces `target` with `edited`; `edited` must not collide with any other record.
        pub fn $set(&mut self, target: &$ty, edited: $ty) -> DomainResult<()> {
            self.$field.set_element(target, edited)?;
            self.changes.publish(BookChange::Updated(RecordKind::$kind));
            Ok(())
        }
    };
}

/// Owner of every record: the unit of "the whole database".
///
/// Each mutation either succeeds and publishes one [`BookChanged`]
/// notification, or fails and leaves the book (and subscribers) untouched.
#[derive(Debug, Default)]
pub struct ClinicBook {
    patients: UniqueList<Patient>,
    doctors: UniqueList<Doctor>,
    med_hists: UniqueList<MedicalHistory>,
    prescriptions: UniqueList<Prescription>,
    appointments: UniqueList<Appointment>,
    next_person_id: PersonId,
    changes: ChangeFeed,
}

impl ClinicBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `snapshot`, rejecting duplicate records.
    pub fn from_snapshot(snapshot: BookSnapshot) -> DomainResult<Self> {
        let mut book = Self::new();
        book.reset_data(snapshot)?;
        Ok(book)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> Subscription<BookChangeEnvelope> {
        self.changes.subscribe()
    }

    /// The id the next added patient or doctor should carry.
    pub fn next_person_id(&self) -> PersonId {
        self.next_person_id
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            patients: self.patients.as_slice().to_vec(),
            doctors: self.doctors.as_slice().to_vec(),
            med_hists: self.med_hists.as_slice().to_vec(),
            prescriptions: self.prescriptions.as_slice().to_vec(),
            appointments: self.appointments.as_slice().to_vec(),
            next_person_id: self.next_person_id,
        }
    }

    /// Replaces all five collections with the contents of `snapshot`.
    ///
    /// A person id of `u32::MAX` is rejected, since no id could follow it.
    /// Every collection is validated before any is replaced, so a snapshot
    /// with duplicates in one collection leaves the whole book unchanged.
    pub fn reset_data(&mut self, snapshot: BookSnapshot) -> DomainResult<()> {
        let BookSnapshot {
            patients,
            doctors,
            med_hists,
            prescriptions,
            appointments,
            next_person_id,
        } = snapshot;

        let floor = match patients
            .iter()
            .map(Patient::id)
            .chain(doctors.iter().map(Doctor::id))
            .max()
        {
            Some(highest) => highest.try_next()?,
            None => PersonId::FIRST,
        };

        let patients = UniqueList::from_vec(patients)?;
        let doctors = UniqueList::from_vec(doctors)?;
        let med_hists = UniqueList::from_vec(med_hists)?;
        let prescriptions = UniqueList::from_vec(prescriptions)?;
        let appointments = UniqueList::from_vec(appointments)?;

        self.patients = patients;
        self.doctors = doctors;
        self.med_hists = med_hists;
        self.prescriptions = prescriptions;
        self.appointments = appointments;
        self.next_person_id = next_person_id.max(floor);

        self.changes.publish(BookChange::Reset);
        Ok(())
    }

    //// patient-level operations

    /// Adds a patient; its identity must not already be present.
    ///
    /// Fails without touching the book when the patient's id is the last one
    /// the sequence can hand out.
    pub fn add_patient(&mut self, patient: Patient) -> DomainResult<()> {
        let following = patient.id().try_next()?;
        self.patients.add(patient)?;
        self.next_person_id = self.next_person_id.max(following);
        self.changes.publish(BookChange::Added(RecordKind::Patient));
        Ok(())
    }

    collection_ops!(Patient, Patient, patients, patients, has_patient, remove_patient, set_patient);

    pub fn patient_by_id(&self, id: PersonId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    //// doctor-level operations

    pub fn add_doctor(&mut self, doctor: Doctor) -> DomainResult<()> {
        let following = doctor.id().try_next()?;
        self.doctors.add(doctor)?;
        self.next_person_id = self.next_person_id.max(following);
        self.changes.publish(BookChange::Added(RecordKind::Doctor));
        Ok(())
    }

    collection_ops!(Doctor, Doctor, doctors, doctors, has_doctor, remove_doctor, set_doctor);

    pub fn doctor_by_id(&self, id: PersonId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    //// medical history-level operations

    pub fn add_med_hist(&mut self, med_hist: MedicalHistory) -> DomainResult<()> {
        self.med_hists.add(med_hist)?;
        self.changes.publish(BookChange::Added(RecordKind::MedicalHistory));
        Ok(())
    }

    collection_ops!(
        MedicalHistory,
        MedicalHistory,
        med_hists,
        med_hists,
        has_med_hist,
        remove_med_hist,
        set_med_hist
    );

    //// prescription-level operations

    pub fn add_prescription(&mut self, prescription: Prescription) -> DomainResult<()> {
        self.prescriptions.add(prescription)?;
        self.changes.publish(BookChange::Added(RecordKind::Prescription));
        Ok(())
    }

    collection_ops!(
        Prescription,
        Prescription,
        prescriptions,
        prescriptions,
        has_prescription,
        remove_prescription,
        set_prescription
    );

    //// appointment-level operations

    pub fn add_appointment(&mut self, appointment: Appointment) -> DomainResult<()> {
        self.appointments.add(appointment)?;
        self.changes.publish(BookChange::Added(RecordKind::Appointment));
        Ok(())
    }

    collection_ops!(
        Appointment,
        Appointment,
        appointments,
        appointments,
        has_appointment,
        remove_appointment,
        set_appointment
    );
}

/// Books compare equal when their patients match and their medical histories
/// carry the same ids in the same order.
///
/// Doctors, prescriptions and appointments are deliberately left out; use
/// [`BookSnapshot`] equality for a full comparison.
impl PartialEq for ClinicBook {
    fn eq(&self, other: &Self) -> bool {
        self.patients == other.patients
            && self.med_hists.len() == other.med_hists.len()
            && self
                .med_hists
                .iter()
                .zip(other.med_hists.iter())
                .all(|(a, b)| a.same_identity(b))
    }
}

impl core::fmt::Display for ClinicBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} patients, {} doctors, {} medical histories, {} prescriptions, {} appointments",
            self.patients.len(),
            self.doctors.len(),
            self.med_hists.len(),
            self.prescriptions.len(),
            self.appointments.len()
        )
    }
}
