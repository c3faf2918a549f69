//! Integration tests for error types.

use stylecast_foundation::{CompareOp, Error, ErrorKind, Predicate};

#[test]
fn contradiction_error_carries_the_candidate() {
    let candidate = Predicate::new("zoom", CompareOp::Equal, 10);
    let err = Error::contradiction(candidate.clone());
    match err.kind {
        ErrorKind::Contradiction { candidate: held } => assert_eq!(held, candidate),
    }
}

#[test]
fn contradiction_display_names_the_predicate() {
    let err = Error::contradiction(Predicate::new("highway", CompareOp::NotEqual, "path"));
    let msg = format!("{err}");
    assert!(msg.contains("highway!=path"));
    assert!(msg.contains("contradicts"));
}
