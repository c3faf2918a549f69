//! Error types for the Stylecast system.
//!
//! The algebra itself reports outcomes through explicit result enums; these
//! errors exist for the fused insertion surface, where a rejected predicate
//! is an error the caller handles at rule level.

use thiserror::Error;

use crate::predicate::Predicate;

/// The main error type for Stylecast operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a contradiction error for a rejected predicate.
    #[must_use]
    pub fn contradiction(candidate: Predicate) -> Self {
        Self::new(ErrorKind::Contradiction { candidate })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A candidate predicate can never hold together with the predicates
    /// already accepted for its rule context.
    #[error("predicate {candidate} contradicts the accepted filter set")]
    Contradiction {
        /// The rejected predicate.
        candidate: Predicate,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
