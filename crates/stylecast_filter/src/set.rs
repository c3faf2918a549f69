//! The canonical filter set: storage, mutation, merge, and projection.

use std::fmt;
use std::sync::Arc;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stylecast_foundation::{CompareOp, Error, Predicate, Result, Value};

use crate::admission::{Admission, eq, ge, gt, le, lt};
use crate::slot::{SlotId, SlotKind};

/// A canonical, minimal, contradiction-free conjunction of predicates
/// representing one rule context's effective filter.
///
/// Predicates enter through [`check`](Self::check) followed by
/// [`apply`](Self::apply), or the fused [`insert`](Self::insert). After
/// every completed mutation the set holds:
///
/// - at most one equality per key, subsuming every relational and
///   inequality slot on that key;
/// - at most one bound per relational slot per key, always the tightest
///   known;
/// - no relational bound implied by another bound on the same key;
/// - no jointly unsatisfiable predicates (contradictions are refused
///   before insertion).
///
/// Cloning is cheap (structural sharing); [`merge`](Self::merge) relies on
/// this to produce new sets without copying the target. Once a set's
/// [`identity`](Self::identity) has been read for deduplication it should
/// be treated as frozen, since further insertions would invalidate the
/// cached key.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterSet {
    slots: OrdMap<SlotId, Predicate>,
}

/// Outcome of a successful fused insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The predicate was applied and the canonical content changed.
    Added,
    /// The predicate was already implied; nothing changed.
    Redundant,
}

/// Result of merging one filter set into another.
#[derive(Clone, Debug)]
pub enum MergeResult {
    /// A new set holding the conjunction of both inputs.
    Merged(FilterSet),
    /// Every source predicate was already implied; the target stands
    /// unchanged and callers may keep using the existing instance.
    NoChange,
    /// The two contexts are jointly unsatisfiable; no set is produced.
    Incompatible,
}

impl MergeResult {
    /// Returns true if the source added nothing.
    #[must_use]
    pub const fn is_no_change(&self) -> bool {
        matches!(self, Self::NoChange)
    }

    /// Returns true if the contexts cannot jointly hold.
    #[must_use]
    pub const fn is_incompatible(&self) -> bool {
        matches!(self, Self::Incompatible)
    }

    /// Returns the merged set, if one was produced.
    #[must_use]
    pub fn into_merged(self) -> Option<FilterSet> {
        match self {
            Self::Merged(set) => Some(set),
            _ => None,
        }
    }
}

impl FilterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: OrdMap::new(),
        }
    }

    /// Number of stored predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no predicate is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates the stored predicates in slot order (key-major, operator
    /// class within a key).
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.slots.values()
    }

    /// Looks up the predicate stored in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: &SlotId) -> Option<&Predicate> {
        self.slots.get(slot)
    }

    pub(crate) fn equality(&self, key: &Arc<str>) -> Option<&Predicate> {
        self.slots.get(&SlotId::new(key.clone(), SlotKind::Equal))
    }

    /// The bound held in one of the four relational slots on `key`.
    pub(crate) fn bound(&self, key: &Arc<str>, kind: SlotKind) -> Option<&Predicate> {
        self.slots.get(&SlotId::new(key.clone(), kind))
    }

    /// True if a `!=` slot on `key` holds a value semantically equal to
    /// `value`. Distinct representations of one number (`5` vs `5.0`)
    /// occupy distinct slots but exclude the same value, so this scans
    /// rather than probing a single slot.
    pub(crate) fn excludes(&self, key: &str, value: &Value) -> bool {
        self.not_equal_slot(key, value).is_some()
    }

    fn not_equal_slot(&self, key: &str, value: &Value) -> Option<SlotId> {
        self.slots.iter().find_map(|(id, p)| {
            (id.key.as_ref() == key
                && matches!(id.kind, SlotKind::NotEqual(_))
                && eq(&p.value, value))
            .then(|| id.clone())
        })
    }

    /// Applies a predicate previously classified [`Admission::Accept`].
    ///
    /// Equality clears every slot on its key before installing; a new
    /// bound clears the relational slots it subsumes; an inclusive bound
    /// meeting a `!=` of the same value installs tightened to the strict
    /// bound. Inequality and pattern predicates install into their own
    /// distinct-value slots.
    ///
    /// Calling this with a predicate the paired [`check`](Self::check) did
    /// not accept leaves the invariants undefined; that is a precondition
    /// violation, not a recoverable error.
    pub fn apply(&mut self, predicate: Predicate) {
        match predicate.op {
            CompareOp::Equal => {
                self.remove_key(&predicate.key);
                self.install(predicate);
            }
            CompareOp::NotEqual | CompareOp::Match => self.install(predicate),
            CompareOp::Greater => {
                self.remove_subsumed_bounds(&predicate.key, |b| le(b, &predicate.value));
                self.install(predicate);
            }
            CompareOp::GreaterOrEqual => {
                self.remove_subsumed_bounds(&predicate.key, |b| lt(b, &predicate.value));
                self.install_inclusive(predicate, CompareOp::Greater);
            }
            CompareOp::Less => {
                self.remove_subsumed_bounds(&predicate.key, |b| ge(b, &predicate.value));
                self.install(predicate);
            }
            CompareOp::LessOrEqual => {
                self.remove_subsumed_bounds(&predicate.key, |b| gt(b, &predicate.value));
                self.install_inclusive(predicate, CompareOp::Less);
            }
        }
    }

    /// Classifies and, on `Accept`, applies `predicate` in one call.
    ///
    /// # Errors
    /// Returns [`ErrorKind::Contradiction`](stylecast_foundation::ErrorKind)
    /// if the predicate cannot hold jointly with the set; the set is left
    /// untouched.
    pub fn insert(&mut self, predicate: Predicate) -> Result<Insertion> {
        match self.check(&predicate) {
            Admission::Accept => {
                self.apply(predicate);
                Ok(Insertion::Added)
            }
            Admission::Redundant => Ok(Insertion::Redundant),
            Admission::Reject => Err(Error::contradiction(predicate)),
        }
    }

    /// Builds a set from a predicate sequence, in order.
    ///
    /// # Errors
    /// Returns the first contradiction encountered, if any.
    pub fn from_predicates(predicates: impl IntoIterator<Item = Predicate>) -> Result<Self> {
        let mut set = Self::new();
        for predicate in predicates {
            set.insert(predicate)?;
        }
        Ok(set)
    }

    /// Folds `other` into this set, AND-ing the two rule contexts.
    ///
    /// Neither input is mutated. A single rejected source predicate makes
    /// the whole merge [`MergeResult::Incompatible`] with no partial set;
    /// a source adding nothing yields [`MergeResult::NoChange`] so callers
    /// can keep the existing target instance. Otherwise the accepted
    /// source predicates are applied, in the source's iteration order, to
    /// a clone of the target.
    #[must_use]
    pub fn merge(&self, other: &FilterSet) -> MergeResult {
        let mut additions = Vec::new();
        for predicate in other.predicates() {
            match self.check(predicate) {
                Admission::Reject => return MergeResult::Incompatible,
                Admission::Accept => additions.push(predicate.clone()),
                Admission::Redundant => {}
            }
        }
        if additions.is_empty() {
            return MergeResult::NoChange;
        }
        let mut merged = self.clone();
        for predicate in additions {
            merged.apply(predicate);
        }
        MergeResult::Merged(merged)
    }

    /// Canonical identity of this set: every stored predicate's
    /// [`id`](Predicate::id), sorted lexically, tab-joined.
    ///
    /// A pure grouping key: two rule contexts with equal identities carry
    /// exactly the same effective filters. Not meant as human-facing
    /// syntax.
    #[must_use]
    pub fn identity(&self) -> String {
        let mut ids: Vec<String> = self.predicates().map(Predicate::id).collect();
        ids.sort();
        ids.join("\t")
    }

    /// Renders the conjunction as an expression string, each predicate
    /// parenthesized and joined with `" and "`: `(a=1) and (b>2)`. The
    /// empty set renders to the empty string (no filter clause).
    #[must_use]
    pub fn expression(&self) -> String {
        self.predicates()
            .map(|p| format!("({p})"))
            .collect::<Vec<_>>()
            .join(" and ")
    }

    /// Renders the filter clause for the generated document, or the empty
    /// string when no filter applies. `&`, `<` and `>` are escaped.
    #[must_use]
    pub fn to_xml(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<Filter>{}</Filter>", xml_escape(&self.expression()))
    }

    fn install(&mut self, predicate: Predicate) {
        self.slots.insert(SlotId::for_predicate(&predicate), predicate);
    }

    // An inclusive bound meeting a `!=` of the same value tightens to the
    // strict bound and consumes the inequality slot.
    fn install_inclusive(&mut self, predicate: Predicate, strict: CompareOp) {
        if let Some(slot) = self.not_equal_slot(&predicate.key, &predicate.value) {
            self.slots.remove(&slot);
            self.install(Predicate {
                op: strict,
                ..predicate
            });
        } else {
            self.install(predicate);
        }
    }

    // Collect-then-remove: the map is never modified while iterating.
    fn remove_key(&mut self, key: &str) {
        let stale: Vec<SlotId> = self
            .slots
            .keys()
            .filter(|id| id.key.as_ref() == key)
            .cloned()
            .collect();
        for id in stale {
            self.slots.remove(&id);
        }
    }

    fn remove_subsumed_bounds(&mut self, key: &str, subsumed: impl Fn(&Value) -> bool) {
        let stale: Vec<SlotId> = self
            .slots
            .iter()
            .filter(|(id, p)| {
                id.key.as_ref() == key && id.kind.is_relational() && subsumed(&p.value)
            })
            .map(|(id, _)| id.clone())
            .collect();
        for id in stale {
            self.slots.remove(&id);
        }
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
