//! Prescriptions.

use medbook_core::{Identity, ValueObject, same_value};

use crate::fields::{Description, MedicineName};

/// A medicine with its dosage notes.
///
/// Prescriptions have no narrower identity: two prescriptions are the same
/// exactly when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    medicine_name: MedicineName,
    description: Description,
}

impl Prescription {
    pub fn new(medicine_name: MedicineName, description: Description) -> Self {
        Self {
            medicine_name,
            description,
        }
    }

    pub fn medicine_name(&self) -> &MedicineName {
        &self.medicine_name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

impl ValueObject for Prescription {}

impl Identity for Prescription {
    fn same_identity(&self, other: &Self) -> bool {
        same_value(self, other)
    }
}

impl core::fmt::Display for Prescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Description: {}", self.medicine_name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presc(name: &str, description: &str) -> Prescription {
        Prescription::new(name.parse().unwrap(), description.parse().unwrap())
    }

    #[test]
    fn identity_is_full_equality() {
        let a = presc("Acetaminophen", "500 mg, for relieving pain");
        assert!(a.same_identity(&presc("Acetaminophen", "500 mg, for relieving pain")));
        assert!(!a.same_identity(&presc("Acetaminophen", "250 mg")));
    }
}
