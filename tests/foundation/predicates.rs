//! Integration tests for predicates and comparison operators.

use stylecast_foundation::{CompareOp, Predicate};

#[test]
fn operator_symbols() {
    assert_eq!(CompareOp::Equal.symbol(), "=");
    assert_eq!(CompareOp::NotEqual.symbol(), "!=");
    assert_eq!(CompareOp::Match.symbol(), "=~");
    assert_eq!(CompareOp::Greater.symbol(), ">");
    assert_eq!(CompareOp::GreaterOrEqual.symbol(), ">=");
    assert_eq!(CompareOp::Less.symbol(), "<");
    assert_eq!(CompareOp::LessOrEqual.symbol(), "<=");
}

#[test]
fn operator_lookup_from_symbol() {
    assert_eq!(CompareOp::from_symbol(">="), Some(CompareOp::GreaterOrEqual));
    assert_eq!(CompareOp::from_symbol("=~"), Some(CompareOp::Match));
    assert_eq!(CompareOp::from_symbol("~"), None);
    assert_eq!(CompareOp::from_symbol("=>"), None);
}

#[test]
fn predicate_display_is_compact() {
    let p = Predicate::new("highway", CompareOp::Equal, "motorway");
    assert_eq!(p.to_string(), "highway=motorway");

    let p = Predicate::new("population", CompareOp::GreaterOrEqual, 1000);
    assert_eq!(p.to_string(), "population>=1000");

    let p = Predicate::new("name", CompareOp::Match, "^A");
    assert_eq!(p.to_string(), "name=~^A");
}

#[test]
fn predicate_id_distinguishes_values_and_operators() {
    let gt = Predicate::new("zoom", CompareOp::Greater, 4);
    let ge = Predicate::new("zoom", CompareOp::GreaterOrEqual, 4);
    let gt5 = Predicate::new("zoom", CompareOp::Greater, 5);
    assert_ne!(gt.id(), ge.id());
    assert_ne!(gt.id(), gt5.id());
}

#[test]
fn predicate_equality_is_semantic() {
    let int_form = Predicate::new("zoom", CompareOp::Less, 10);
    let float_form = Predicate::new("zoom", CompareOp::Less, 10.0);
    assert_eq!(int_form, float_form);
}
