//! Doctor records.

use std::collections::BTreeSet;

use medbook_core::{Entity, Identity, PersonId};

use crate::fields::{Address, Name, Phone, Specialisation};

/// Everything about a doctor except the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDetails {
    pub name: Name,
    pub phone: Phone,
    pub address: Address,
    pub specialisations: BTreeSet<Specialisation>,
}

/// A registered doctor. Identity is (name, phone), as for patients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: PersonId,
    details: DoctorDetails,
}

impl Doctor {
    pub fn new(id: PersonId, details: DoctorDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn details(&self) -> &DoctorDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        &self.details.name
    }

    pub fn phone(&self) -> &Phone {
        &self.details.phone
    }

    pub fn address(&self) -> &Address {
        &self.details.address
    }

    pub fn specialisations(&self) -> &BTreeSet<Specialisation> {
        &self.details.specialisations
    }

    pub fn with_details(&self, details: DoctorDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}

impl Identity for Doctor {
    fn same_identity(&self, other: &Self) -> bool {
        self.details.name == other.details.name && self.details.phone == other.details.phone
    }
}

impl Entity for Doctor {
    type Key = (Name, Phone);

    fn identity_key(&self) -> Self::Key {
        (self.details.name.clone(), self.details.phone.clone())
    }
}

impl core::fmt::Display for Doctor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} Id: {} Phone: {} Address: {} Specialisations: ",
            self.details.name, self.id, self.details.phone, self.details.address,
        )?;
        for spec in &self.details.specialisations {
            write!(f, "[{spec}]")?;
        }
        Ok(())
    }
}
