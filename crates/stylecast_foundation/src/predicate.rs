//! Single-attribute comparison predicates.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::op::CompareOp;
use crate::value::Value;

/// A single attribute comparison: key, operator, value.
///
/// Predicates are immutable once constructed. When a bound tightens, the
/// filter set installs a rewritten copy with a different operator; a shared
/// predicate is never mutated in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Predicate {
    /// Attribute key the comparison applies to.
    pub key: Arc<str>,
    /// Comparison operator.
    pub op: CompareOp,
    /// Comparison value (or pattern, for `=~`).
    pub value: Value,
}

impl Predicate {
    /// Creates a predicate.
    pub fn new(key: impl Into<Arc<str>>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            op,
            value: value.into(),
        }
    }

    /// Renders this predicate's identity contribution: key, operator
    /// symbol, and value concatenated (`access=yes`, `population>1000`).
    ///
    /// Identity strings are sorted and joined by the owning set to build
    /// its deduplication key.
    #[must_use]
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, self.op, self.value)
    }
}
