//! Slot identifiers addressing the canonical filter map.
//!
//! A slot names the storage location a predicate occupies inside a
//! [`FilterSet`](crate::set::FilterSet): one equality and four relational
//! slots per key, plus one slot per distinct `!=` value and per distinct
//! `=~` pattern. Structured keys keep the operator set exhaustively
//! matched wherever slots are consulted.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stylecast_foundation::{CompareOp, Predicate, Value};

/// Operator class of a slot, with the distinguishing payload for
/// multi-valued slots.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlotKind {
    /// `key =`, the single equality slot.
    Equal,
    /// `key != value`, one slot per distinct value.
    NotEqual(Value),
    /// `key =~ pattern`, one slot per distinct pattern.
    Match(Value),
    /// `key >`, strict lower bound.
    Greater,
    /// `key >=`, inclusive lower bound.
    GreaterOrEqual,
    /// `key <`, strict upper bound.
    Less,
    /// `key <=`, inclusive upper bound.
    LessOrEqual,
}

impl SlotKind {
    /// Returns true for the four relational bound slots.
    #[must_use]
    pub const fn is_relational(&self) -> bool {
        matches!(
            self,
            Self::Greater | Self::GreaterOrEqual | Self::Less | Self::LessOrEqual
        )
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Equal => 0,
            Self::NotEqual(_) => 1,
            Self::Match(_) => 2,
            Self::Greater => 3,
            Self::GreaterOrEqual => 4,
            Self::Less => 5,
            Self::LessOrEqual => 6,
        }
    }

    fn payload(&self) -> Option<&Value> {
        match self {
            Self::NotEqual(v) | Self::Match(v) => Some(v),
            _ => None,
        }
    }
}

/// Storage location of one predicate inside a filter set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotId {
    /// Attribute key the slot belongs to.
    pub key: Arc<str>,
    /// Operator class, with the distinguishing value where applicable.
    pub kind: SlotKind,
}

impl SlotId {
    /// Creates a slot identifier.
    #[must_use]
    pub const fn new(key: Arc<str>, kind: SlotKind) -> Self {
        Self { key, kind }
    }

    /// Returns the slot a predicate occupies.
    #[must_use]
    pub fn for_predicate(predicate: &Predicate) -> Self {
        let kind = match predicate.op {
            CompareOp::Equal => SlotKind::Equal,
            CompareOp::NotEqual => SlotKind::NotEqual(predicate.value.clone()),
            CompareOp::Match => SlotKind::Match(predicate.value.clone()),
            CompareOp::Greater => SlotKind::Greater,
            CompareOp::GreaterOrEqual => SlotKind::GreaterOrEqual,
            CompareOp::Less => SlotKind::Less,
            CompareOp::LessOrEqual => SlotKind::LessOrEqual,
        };
        Self::new(predicate.key.clone(), kind)
    }
}

impl PartialEq for SlotId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SlotId {}

impl PartialOrd for SlotId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotId {
    /// Key-major order: attribute key, then operator class, then payload by
    /// the canonical total order. This fixes the set's deterministic
    /// internal ordering, and with it the expression rendering order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.kind.rank().cmp(&other.kind.rank()))
            .then_with(|| match (self.kind.payload(), other.kind.payload()) {
                (Some(a), Some(b)) => a.canonical_cmp(b),
                _ => Ordering::Equal,
            })
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SlotKind::Equal => write!(f, "{}=", self.key),
            SlotKind::NotEqual(v) => write!(f, "{}!={v}", self.key),
            SlotKind::Match(v) => write!(f, "{}=~{v}", self.key),
            SlotKind::Greater => write!(f, "{}>", self.key),
            SlotKind::GreaterOrEqual => write!(f, "{}>=", self.key),
            SlotKind::Less => write!(f, "{}<", self.key),
            SlotKind::LessOrEqual => write!(f, "{}<=", self.key),
        }
    }
}
