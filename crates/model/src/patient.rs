//! Patient records.

use std::collections::BTreeSet;

use medbook_core::{Entity, Identity, PersonId};

use crate::fields::{Address, Age, Gender, Name, Phone, Tag};

/// Everything about a patient except the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: Name,
    pub phone: Phone,
    pub gender: Gender,
    pub age: Age,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
}

/// A registered patient.
///
/// Immutable: edits produce a new `Patient` via [`Patient::with_details`]
/// that keeps the original id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PersonId,
    details: PatientDetails,
}

impl Patient {
    pub fn new(id: PersonId, details: PatientDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn details(&self) -> &PatientDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        &self.details.name
    }

    pub fn phone(&self) -> &Phone {
        &self.details.phone
    }

    pub fn gender(&self) -> Gender {
        self.details.gender
    }

    pub fn age(&self) -> Age {
        self.details.age
    }

    pub fn address(&self) -> &Address {
        &self.details.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details.tags
    }

    /// Returns a copy carrying `details` under the same id.
    pub fn with_details(&self, details: PatientDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}

/// Weak identity: same name and phone means same patient.
impl Identity for Patient {
    fn same_identity(&self, other: &Self) -> bool {
        self.details.name == other.details.name && self.details.phone == other.details.phone
    }
}

impl Entity for Patient {
    type Key = (Name, Phone);

    fn identity_key(&self) -> Self::Key {
        (self.details.name.clone(), self.details.phone.clone())
    }
}

impl core::fmt::Display for Patient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} Id: {} Phone: {} Gender: {} Age: {} Address: {} Tags: ",
            self.details.name,
            self.id,
            self.details.phone,
            self.details.gender,
            self.details.age,
            self.details.address,
        )?;
        for tag in &self.details.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn patient_details(name: &str, phone: &str) -> PatientDetails {
        PatientDetails {
            name: name.parse().unwrap(),
            phone: phone.parse().unwrap(),
            gender: "F".parse().unwrap(),
            age: "30".parse().unwrap(),
            address: "123, Jurong West Ave 6".parse().unwrap(),
            tags: BTreeSet::new(),
        }
    }

    pub fn patient(id: u32, name: &str, phone: &str) -> Patient {
        Patient::new(PersonId::new(id), patient_details(name, phone))
    }
}
