//! Stylecast - cascaded style rules compiled to minimal filter expressions
//!
//! This crate re-exports both layers of the Stylecast system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: stylecast_filter     — Admission, tightening, merge, projection
//! Layer 0: stylecast_foundation — Core types (Value, CompareOp, Predicate, Error)
//! ```

pub use stylecast_filter as filter;
pub use stylecast_foundation as foundation;
