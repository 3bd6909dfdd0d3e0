//! The model commands run against: book + undo history + displayed views.

use medbook_core::{DomainError, DomainResult};

use crate::appointment::Appointment;
use crate::book::{BookChangeEnvelope, BookSnapshot, ClinicBook};
use crate::doctor::Doctor;
use crate::history::{DEFAULT_HISTORY_LIMIT, History, HistoryError};
use crate::medical_history::MedicalHistory;
use crate::patient::Patient;
use crate::prescription::Prescription;
use medbook_events::Subscription;

/// Filter applied to a displayed list.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// A displayed subset of one collection. No predicate means "show all".
struct View<T> {
    predicate: Option<Predicate<T>>,
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self { predicate: None }
    }
}

impl<T> View<T> {
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        match &self.predicate {
            Some(predicate) => items.iter().filter(|item| predicate(item)).collect(),
            None => items.iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error(transparent)]
    History(#[from] HistoryError),

    /// A stored snapshot could not be adopted; history is left as it was.
    #[error("could not restore snapshot: {0}")]
    Restore(DomainError),
}

macro_rules! view_ops {
    ($ty:ty, $view:ident, $source:ident, $filtered:ident, $filter:ident, $show_all:ident) => {
        /// Records currently displayed, in book order.
        pub fn $filtered(&self) -> Vec<&$ty> {
            self.$view.apply(self.book.$source())
        }

        pub fn $filter(&mut self, predicate: impl Fn(&$ty) -> bool + 'static) {
            self.$view.predicate = Some(Box::new(predicate));
        }

        pub fn $show_all(&mut self) {
            self.$view.predicate = None;
        }
    };
}

/// Everything a command may read or change.
///
/// All mutations go through [`Model::commit`], which records the
/// pre-mutation snapshot in the history only when the mutation succeeded.
pub struct Model {
    book: ClinicBook,
    history: History<BookSnapshot>,
    patient_view: View<Patient>,
    doctor_view: View<Doctor>,
    med_hist_view: View<MedicalHistory>,
    prescription_view: View<Prescription>,
    appointment_view: View<Appointment>,
    selected_patient: Option<Patient>,
    selected_med_hist: Option<MedicalHistory>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ClinicBook::new(), DEFAULT_HISTORY_LIMIT)
    }
}

impl Model {
    pub fn new(book: ClinicBook, history_limit: usize) -> Self {
        Self {
            book,
            history: History::with_limit(history_limit),
            patient_view: View::default(),
            doctor_view: View::default(),
            med_hist_view: View::default(),
            prescription_view: View::default(),
            appointment_view: View::default(),
            selected_patient: None,
            selected_med_hist: None,
        }
    }

    pub fn book(&self) -> &ClinicBook {
        &self.book
    }

    /// Subscribe to the book's change notifications.
    pub fn subscribe(&self) -> Subscription<BookChangeEnvelope> {
        self.book.subscribe()
    }

    /// Runs one mutation against the book as an undoable step.
    ///
    /// `mutation` must leave the book untouched when it fails (every
    /// [`ClinicBook`] operation does); nothing is recorded in that case.
    pub fn commit<R>(
        &mut self,
        mutation: impl FnOnce(&mut ClinicBook) -> DomainResult<R>,
    ) -> DomainResult<R> {
        let before = self.book.snapshot();
        let out = mutation(&mut self.book)?;
        self.history.commit(before);
        self.clear_stale_selection();
        Ok(out)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Result<(), ModelError> {
        let previous = self.history.undo(self.book.snapshot())?;
        if let Err(err) = self.book.reset_data(previous.clone()) {
            // Put both stacks back the way they were.
            let _ = self.history.redo(previous);
            return Err(ModelError::Restore(err));
        }
        self.clear_stale_selection();
        tracing::debug!(depth = self.history.undo_depth(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), ModelError> {
        let next = self.history.redo(self.book.snapshot())?;
        if let Err(err) = self.book.reset_data(next.clone()) {
            let _ = self.history.undo(next);
            return Err(ModelError::Restore(err));
        }
        self.clear_stale_selection();
        tracing::debug!(depth = self.history.undo_depth(), "redo");
        Ok(())
    }

    view_ops!(Patient, patient_view, patients, filtered_patients, filter_patients, show_all_patients);
    view_ops!(Doctor, doctor_view, doctors, filtered_doctors, filter_doctors, show_all_doctors);
    view_ops!(
        MedicalHistory,
        med_hist_view,
        med_hists,
        filtered_med_hists,
        filter_med_hists,
        show_all_med_hists
    );
    view_ops!(
        Prescription,
        prescription_view,
        prescriptions,
        filtered_prescriptions,
        filter_prescriptions,
        show_all_prescriptions
    );
    view_ops!(
        Appointment,
        appointment_view,
        appointments,
        filtered_appointments,
        filter_appointments,
        show_all_appointments
    );

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.selected_patient.as_ref()
    }

    pub fn select_patient(&mut self, patient: Option<Patient>) {
        self.selected_patient = patient;
    }

    pub fn selected_med_hist(&self) -> Option<&MedicalHistory> {
        self.selected_med_hist.as_ref()
    }

    pub fn select_med_hist(&mut self, med_hist: Option<MedicalHistory>) {
        self.selected_med_hist = med_hist;
    }

    /// Drops selections that no longer exist in the book.
    pub fn clear_stale_selection(&mut self) {
        if self
            .selected_patient
            .as_ref()
            .is_some_and(|p| !self.book.patients().contains(p))
        {
            self.selected_patient = None;
        }
        if self
            .selected_med_hist
            .as_ref()
            .is_some_and(|m| !self.book.med_hists().contains(m))
        {
            self.selected_med_hist = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::fixtures::patient;
    use proptest::prelude::*;

    #[test]
    fn failed_commit_records_nothing() {
        let mut model = Model::default();
        model.commit(|book| book.add_patient(patient(1, "Alice", "111"))).unwrap();
        let err = model
            .commit(|book| book.add_patient(patient(2, "Alice", "111")))
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateEntity);
        model.undo().unwrap();
        assert!(model.book().patients().is_empty());
        assert_eq!(
            model.undo(),
            Err(ModelError::History(HistoryError::NothingToUndo))
        );
    }

    #[test]
    fn filters_select_displayed_records() {
        let mut model = Model::default();
        model.commit(|book| book.add_patient(patient(1, "Alice", "111"))).unwrap();
        model.commit(|book| book.add_patient(patient(2, "Bob", "222"))).unwrap();

        model.filter_patients(|p| p.name().as_str() == "Bob");
        let shown: Vec<&str> = model.filtered_patients().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(shown, vec!["Bob"]);

        model.show_all_patients();
        assert_eq!(model.filtered_patients().len(), 2);
    }

    #[test]
    fn undo_clears_selection_of_removed_patient() {
        let mut model = Model::default();
        let alice = patient(1, "Alice", "111");
        model.commit(|book| book.add_patient(alice.clone())).unwrap();
        model.select_patient(Some(alice));

        model.undo().unwrap();
        assert!(model.selected_patient().is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: after any mix of adds and removes, undoing every commit
        /// restores the starting snapshot exactly.
        #[test]
        fn undo_all_restores_initial_snapshot(
            ops in prop::collection::vec((any::<bool>(), 0u32..6), 1..30)
        ) {
            let mut model = Model::new(ClinicBook::new(), 100);
            model.commit(|book| book.add_patient(patient(100, "Seed", "999"))).unwrap();
            let initial = model.book().snapshot();

            let mut commits = 0;
            for (add, n) in ops {
                let p = patient(n + 1, &format!("Person {n}"), &format!("{}", 100 + n));
                let result = if add {
                    model.commit(|book| book.add_patient(p))
                } else {
                    model.commit(|book| book.remove_patient(&p).map(|_| ()))
                };
                if result.is_ok() {
                    commits += 1;
                }
            }

            for _ in 0..commits {
                model.undo().unwrap();
            }
            prop_assert_eq!(model.book().snapshot(), initial);
        }
    }
}
