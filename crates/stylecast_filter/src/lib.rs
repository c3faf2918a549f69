//! Canonical filter-set algebra for Stylecast.
//!
//! This crate provides:
//! - [`FilterSet`] - The minimal, contradiction-free predicate set of one
//!   rule context
//! - [`Admission`] - Accept/Redundant/Reject classification of candidates
//! - [`MergeResult`] - Outcome of AND-ing two rule contexts together
//! - [`SlotId`] - Structured identifiers addressing the set's slots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod admission;
pub mod set;
pub mod slot;


pub use admission::Admission;
pub use set::{FilterSet, Insertion, MergeResult};
pub use slot::{SlotId, SlotKind};
