//! Admission classification of candidate predicates.
//!
//! Every candidate is classified against the slots already held for its
//! key before it may be applied:
//! - [`Accept`](Admission::Accept) - the predicate adds information the
//!   set does not yet carry.
//! - [`Redundant`](Admission::Redundant) - already implied; applying it
//!   would change nothing.
//! - [`Reject`](Admission::Reject) - provably unsatisfiable together with
//!   the accepted slots.
//!
//! The decision tables consult only slots on the candidate's key. Pattern
//! (`=~`) slots never participate: a pattern is always accepted and never
//! rejects or admits anything else. All comparisons are semantic; an
//! incomparable pair (number vs string) establishes no relation and
//! triggers no rule.

use std::cmp::Ordering;

use stylecast_foundation::{CompareOp, Predicate, Value};

use crate::set::FilterSet;
use crate::slot::SlotKind;

/// Outcome of checking one candidate predicate against a [`FilterSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The predicate adds new information and may be applied.
    Accept,
    /// The predicate is already implied by the set; applying it is a no-op.
    Redundant,
    /// The predicate cannot hold jointly with the set.
    Reject,
}

impl Admission {
    /// Returns true if the candidate was accepted.
    #[must_use]
    pub const fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Returns true if the candidate was already implied.
    #[must_use]
    pub const fn is_redundant(self) -> bool {
        matches!(self, Self::Redundant)
    }

    /// Returns true if the candidate was rejected as contradictory.
    #[must_use]
    pub const fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

// Semantic comparison helpers shared with the mutation step.

pub(crate) fn eq(a: &Value, b: &Value) -> bool {
    a.partial_cmp(b) == Some(Ordering::Equal)
}

pub(crate) fn lt(a: &Value, b: &Value) -> bool {
    a.partial_cmp(b) == Some(Ordering::Less)
}

pub(crate) fn gt(a: &Value, b: &Value) -> bool {
    a.partial_cmp(b) == Some(Ordering::Greater)
}

pub(crate) fn le(a: &Value, b: &Value) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal))
}

pub(crate) fn ge(a: &Value, b: &Value) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Greater | Ordering::Equal))
}

impl FilterSet {
    /// Classifies `candidate` against the current slots for its key.
    ///
    /// Pure: the set is never modified. [`FilterSet::apply`] requires a
    /// prior `Accept` from this check for the same candidate and set.
    #[must_use]
    pub fn check(&self, candidate: &Predicate) -> Admission {
        match candidate.op {
            CompareOp::Match => Admission::Accept,
            CompareOp::Equal => self.check_equal(candidate),
            CompareOp::NotEqual => self.check_not_equal(candidate),
            CompareOp::Greater => self.check_greater(candidate),
            CompareOp::GreaterOrEqual => self.check_greater_or_equal(candidate),
            CompareOp::Less => self.check_less(candidate),
            CompareOp::LessOrEqual => self.check_less_or_equal(candidate),
        }
    }

    fn check_equal(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if eq(&held.value, v) {
                Admission::Redundant
            } else {
                Admission::Reject
            };
        }
        if self.excludes(&c.key, v) {
            return Admission::Reject;
        }
        if self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| gt(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| lt(&b.value, v))
        {
            return Admission::Reject;
        }
        Admission::Accept
    }

    fn check_not_equal(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if eq(&held.value, v) {
                Admission::Reject
            } else {
                Admission::Redundant
            };
        }
        // A bound that already excludes the value makes the inequality
        // redundant, as does an identical inequality slot.
        if self.excludes(&c.key, v)
            || self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| gt(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| lt(&b.value, v))
        {
            return Admission::Redundant;
        }
        Admission::Accept
    }

    fn check_greater(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if le(&held.value, v) {
                Admission::Reject
            } else {
                Admission::Redundant
            };
        }
        if self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| le(&b.value, v))
        {
            return Admission::Reject;
        }
        if self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| gt(&b.value, v))
        {
            return Admission::Redundant;
        }
        Admission::Accept
    }

    fn check_greater_or_equal(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if lt(&held.value, v) {
                Admission::Reject
            } else {
                Admission::Redundant
            };
        }
        if self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| lt(&b.value, v))
        {
            return Admission::Reject;
        }
        if self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| ge(&b.value, v))
        {
            return Admission::Redundant;
        }
        Admission::Accept
    }

    fn check_less(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if ge(&held.value, v) {
                Admission::Reject
            } else {
                Admission::Redundant
            };
        }
        if self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| ge(&b.value, v))
        {
            return Admission::Reject;
        }
        if self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| lt(&b.value, v))
        {
            return Admission::Redundant;
        }
        Admission::Accept
    }

    fn check_less_or_equal(&self, c: &Predicate) -> Admission {
        let v = &c.value;
        if let Some(held) = self.equality(&c.key) {
            return if gt(&held.value, v) {
                Admission::Reject
            } else {
                Admission::Redundant
            };
        }
        if self.bound(&c.key, SlotKind::Greater).is_some_and(|b| ge(&b.value, v))
            || self
                .bound(&c.key, SlotKind::GreaterOrEqual)
                .is_some_and(|b| gt(&b.value, v))
        {
            return Admission::Reject;
        }
        if self.bound(&c.key, SlotKind::Less).is_some_and(|b| le(&b.value, v))
            || self
                .bound(&c.key, SlotKind::LessOrEqual)
                .is_some_and(|b| le(&b.value, v))
        {
            return Admission::Redundant;
        }
        Admission::Accept
    }
}
