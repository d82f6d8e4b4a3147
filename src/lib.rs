pub mod errors;
pub mod params;
pub mod validate;
pub mod matrix;
mod comparator;

use serde_json::Value;

pub use comparator::{ComparisonResult, MatrixComparator, CORRECT, EMPTY_FIELDS, SHAPE_MISMATCH};
pub use errors::{GradeError, Result, Side};
pub use params::Params;
pub use validate::{check_structure, validate_structure, FaultKind, StructureFault};

/// Grade `response` against `answer` in one call.
/// Returns `Err` only for a malformed answer or an operand that cannot be made rectangular.
pub fn compare(response: &Value, answer: &Value, params: &Params) -> Result<ComparisonResult> {
    MatrixComparator::new(params.clone()).compare(response, answer)
}
