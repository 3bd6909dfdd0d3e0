//! `medbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model,
//! identity traits, typed ids and the identity-checked collection every
//! record kind is stored in.

pub mod entity;
pub mod error;
pub mod id;
pub mod unique_list;
pub mod value_object;

pub use entity::{Entity, Identity};
pub use error::{DomainError, DomainResult};
pub use id::{ID_CONSTRAINTS, MESSAGE_ID_SEQUENCE_EXHAUSTED, PersonId};
pub use unique_list::UniqueList;
pub use value_object::{ValueObject, same_value};
