//! Projection of canonical sets: expression strings, identity strings,
//! and the generated filter clause.

use stylecast_filter::FilterSet;
use stylecast_foundation::{CompareOp, Predicate};

#[test]
fn expression_renders_parenthesized_conjunction() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("b", CompareOp::Greater, 2)).unwrap();
    set.insert(Predicate::new("a", CompareOp::Equal, 1)).unwrap();
    assert_eq!(set.expression(), "(a=1) and (b>2)");
}

#[test]
fn expression_of_empty_set_is_empty() {
    assert_eq!(FilterSet::new().expression(), "");
}

#[test]
fn expression_order_is_key_major() {
    // Insertion order does not matter; slot order does.
    let mut set = FilterSet::new();
    set.insert(Predicate::new("zoom", CompareOp::Less, 12)).unwrap();
    set.insert(Predicate::new("highway", CompareOp::Equal, "motorway")).unwrap();
    set.insert(Predicate::new("zoom", CompareOp::GreaterOrEqual, 4)).unwrap();
    assert_eq!(
        set.expression(),
        "(highway=motorway) and (zoom>=4) and (zoom<12)"
    );
}

#[test]
fn display_matches_expression() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("a", CompareOp::Equal, 1)).unwrap();
    assert_eq!(set.to_string(), set.expression());
}

#[test]
fn identity_is_sorted_and_tab_joined() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("b", CompareOp::Equal, 2)).unwrap();
    set.insert(Predicate::new("a", CompareOp::Equal, 1)).unwrap();
    assert_eq!(set.identity(), "a=1\tb=2");
}

#[test]
fn identity_distinguishes_values() {
    let mut a = FilterSet::new();
    a.insert(Predicate::new("k", CompareOp::Equal, 1)).unwrap();
    let mut b = FilterSet::new();
    b.insert(Predicate::new("k", CompareOp::Equal, 2)).unwrap();
    assert_ne!(a.identity(), b.identity());
}

#[test]
fn identity_is_insertion_order_independent_for_disjoint_keys() {
    let forward = FilterSet::from_predicates([
        Predicate::new("a", CompareOp::Equal, 1),
        Predicate::new("b", CompareOp::Greater, 2),
        Predicate::new("c", CompareOp::Less, 3),
    ])
    .unwrap();
    let reverse = FilterSet::from_predicates([
        Predicate::new("c", CompareOp::Less, 3),
        Predicate::new("b", CompareOp::Greater, 2),
        Predicate::new("a", CompareOp::Equal, 1),
    ])
    .unwrap();
    assert_eq!(forward.identity(), reverse.identity());
}

#[test]
fn redundant_insertion_never_changes_identity() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("k", CompareOp::Equal, 1)).unwrap();
    let before = set.identity();
    set.insert(Predicate::new("k", CompareOp::Greater, 0)).unwrap();
    assert_eq!(set.identity(), before);
}

#[test]
fn merge_no_change_preserves_identity() {
    let mut a = FilterSet::new();
    a.insert(Predicate::new("k", CompareOp::Equal, 1)).unwrap();
    let mut b = FilterSet::new();
    b.insert(Predicate::new("k", CompareOp::Greater, 0)).unwrap();

    let before = a.identity();
    assert!(a.merge(&b).is_no_change());
    assert_eq!(a.identity(), before);
}

#[test]
fn float_values_render_like_source_numbers() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("scale", CompareOp::GreaterOrEqual, 1.5)).unwrap();
    set.insert(Predicate::new("zoom", CompareOp::Equal, 5.0)).unwrap();
    assert_eq!(set.expression(), "(scale>=1.5) and (zoom=5)");
}

// =============================================================================
// Filter Clause
// =============================================================================

#[test]
fn xml_clause_wraps_the_expression() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("a", CompareOp::Equal, 1)).unwrap();
    set.insert(Predicate::new("b", CompareOp::Greater, 2)).unwrap();
    assert_eq!(set.to_xml(), "<Filter>(a=1) and (b&gt;2)</Filter>");
}

#[test]
fn xml_clause_escapes_operators_and_values() {
    let mut set = FilterSet::new();
    set.insert(Predicate::new("zoom", CompareOp::Less, 3)).unwrap();
    assert_eq!(set.to_xml(), "<Filter>(zoom&lt;3)</Filter>");

    let mut set = FilterSet::new();
    set.insert(Predicate::new("name", CompareOp::Equal, "Fish & Chips")).unwrap();
    assert_eq!(set.to_xml(), "<Filter>(name=Fish &amp; Chips)</Filter>");
}

#[test]
fn xml_clause_of_empty_set_is_empty() {
    assert_eq!(FilterSet::new().to_xml(), "");
}
