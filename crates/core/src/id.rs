//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Constraint message shared by the command parser and the storage loader.
pub const ID_CONSTRAINTS: &str = "Ids should be non-negative integers";

/// Reported when a record's id leaves no successor for the next patient or doctor.
pub const MESSAGE_ID_SEQUENCE_EXHAUSTED: &str = "No person ids are left to allocate";

/// Identifier of a patient or doctor.
///
/// Allocated from a sequence owned by the record book (never a process-wide
/// counter), so ids are stable across undo/redo and save/load.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u32);

impl PersonId {
    pub const FIRST: PersonId = PersonId(1);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id allocated after this one, or `None` once the sequence is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Like [`PersonId::next`], failing with a domain error at the end of the sequence.
    pub fn try_next(self) -> Result<Self, DomainError> {
        self.next()
            .ok_or_else(|| DomainError::invariant(MESSAGE_ID_SEQUENCE_EXHAUSTED))
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for PersonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for PersonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(ID_CONSTRAINTS));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::validation(ID_CONSTRAINTS))
    }
}
