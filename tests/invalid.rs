use matrix_grader as mg;
use pretty_assertions::assert_eq;
use serde_json::json;

// Untrusted response problems degrade into an incorrect result.
#[test]
fn test_blank_response_cell_is_graded() {
    let out = mg::compare(&json!([["1", " "], ["0", "1"]]), &json!([[1, 0], [0, 1]]), &mg::Params::default()).unwrap();
    assert_eq!(out, mg::ComparisonResult::incorrect(mg::EMPTY_FIELDS));
}

#[test]
fn test_blank_cell_before_valid_cells_is_caught() {
    let out = mg::compare(&json!([["", "0"], ["0", "1"]]), &json!([[1, 0], [0, 1]]), &mg::Params::default()).unwrap();
    assert_eq!(out.feedback, "Response has empty fields.");
}

#[test]
fn test_non_numeric_response_cell_is_graded() {
    let out = mg::compare(&json!([["undefined", "0"]]), &json!([[1, 0]]), &mg::Params::default()).unwrap();
    assert_eq!(out, mg::ComparisonResult::incorrect(mg::EMPTY_FIELDS));
}

// Trusted answer problems are fatal.
#[test]
fn test_blank_answer_cell_is_fatal() {
    let err = mg::compare(&json!([[1, 0]]), &json!([[1, ""]]), &mg::Params::default()).unwrap_err();
    assert!(matches!(err, mg::GradeError::InvalidAnswer(_)));
    assert_eq!(err.to_string(), "Answer has empty fields: empty value at [0][1]");
}

#[test]
fn test_answer_checked_before_response() {
    let err = mg::compare(&json!([[""]]), &json!([["x"]]), &mg::Params::default()).unwrap_err();
    assert!(matches!(err, mg::GradeError::InvalidAnswer(_)));
}

#[test]
fn test_ragged_response_is_fatal() {
    let err = mg::compare(&json!([[1, 0], [1]]), &json!([[1, 0], [0, 1]]), &mg::Params::default()).unwrap_err();
    match err {
        mg::GradeError::Conversion { side, .. } => assert_eq!(side, mg::Side::Response),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_deeply_nested_answer_is_fatal() {
    let err = mg::compare(&json!([[1]]), &json!([[[1]]]), &mg::Params::default()).unwrap_err();
    match err {
        mg::GradeError::Conversion { side, .. } => assert_eq!(side, mg::Side::Answer),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_object_response_is_graded_as_shape_mismatch() {
    let out = mg::compare(&json!({"a": 1}), &json!([[1, 0], [0, 1]]), &mg::Params::default()).unwrap();
    assert_eq!(out, mg::ComparisonResult::incorrect(mg::SHAPE_MISMATCH));
}

#[test]
fn test_object_cell_in_response_is_graded_as_row_mismatch() {
    let out = mg::compare(&json!([[{"a": 1}, 0], [0, 1]]), &json!([[1, 0], [0, 1]]), &mg::Params::default()).unwrap();
    assert!(!out.is_correct);
    assert_eq!(
        out.feedback,
        "Row 1 does not match: Answer: ['1' '0'], Response: [\"{'a': 1}\" '0']"
    );
}
