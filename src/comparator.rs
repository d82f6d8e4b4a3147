use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::errors::{GradeError, Result, Side};
use crate::matrix::{render_cells, Grid};
use crate::params::Params;
use crate::validate::check_structure;

pub const CORRECT: &str = "correct";
pub const EMPTY_FIELDS: &str = "Response has empty fields.";
pub const SHAPE_MISMATCH: &str = "Response and answer shapes do not match.";
const NO_MISMATCH_FOUND: &str = "Response does not match answer.";

/// Verdict for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub is_correct: bool,
    pub feedback: String,
}

impl ComparisonResult {
    pub fn correct() -> Self {
        Self { is_correct: true, feedback: CORRECT.to_string() }
    }

    pub fn incorrect(feedback: impl Into<String>) -> Self {
        Self { is_correct: false, feedback: feedback.into() }
    }
}

/// Grades a response matrix against a reference answer.
#[derive(Debug, Clone, Default)]
pub struct MatrixComparator {
    params: Params,
}

impl MatrixComparator {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Compare `response` against `answer`.
    ///
    /// A malformed answer or an operand that cannot be made rectangular is an `Err`.
    /// Everything wrong with the response alone comes back as an incorrect result.
    pub fn compare(&self, response: &Value, answer: &Value) -> Result<ComparisonResult> {
        if let Err(fault) = check_structure(answer) {
            warn!(%fault, "answer failed structural validation");
            return Err(GradeError::InvalidAnswer(fault));
        }
        if let Err(fault) = check_structure(response) {
            debug!(%fault, "response failed structural validation");
            return Ok(ComparisonResult::incorrect(EMPTY_FIELDS));
        }

        let res = Grid::from_value(response)
            .map_err(|reason| GradeError::Conversion { side: Side::Response, reason })?;
        let ans = Grid::from_value(answer)
            .map_err(|reason| GradeError::Conversion { side: Side::Answer, reason })?;
        trace!(response_shape = ?res.shape(), answer_shape = ?ans.shape(), "coerced operands");

        if res.shape() != ans.shape() {
            return Ok(ComparisonResult::incorrect(SHAPE_MISMATCH));
        }
        if res == ans {
            return Ok(ComparisonResult::correct());
        }

        let feedback = locate_mismatch(&ans, &res);
        debug!(%feedback, "response does not match");
        Ok(ComparisonResult::incorrect(feedback))
    }
}

// Both grids have the same shape and differ somewhere.
fn locate_mismatch(ans: &Grid, res: &Grid) -> String {
    let found = match (ans, res) {
        (Grid::Scalar(a), Grid::Scalar(r)) => {
            Some(format!("Response does not match: Answer: {a}, Response: {r}"))
        }
        (Grid::Vector(a), Grid::Vector(r)) => a
            .iter()
            .zip(r)
            .find_position(|(x, y)| x != y)
            .map(|(i, (x, y))| format!("Row {} does not match: Answer: {x}, Response: {y}", i + 1)),
        (Grid::Matrix { rows: a, .. }, Grid::Matrix { rows: r, .. }) => {
            row_mismatch(a, r).or_else(|| column_mismatch(a, r))
        }
        _ => None,
    };
    found.unwrap_or_else(|| NO_MISMATCH_FOUND.to_string())
}

fn row_mismatch(ans: &[Vec<String>], res: &[Vec<String>]) -> Option<String> {
    ans.iter().zip(res).find_position(|(a, r)| a != r).map(|(i, (a, r))| {
        format!(
            "Row {} does not match: Answer: {}, Response: {}",
            i + 1,
            render_cells(a.as_slice()),
            render_cells(r.as_slice())
        )
    })
}

// Rows are assumed to share one length, so the first row bounds the columns.
fn column_mismatch(ans: &[Vec<String>], res: &[Vec<String>]) -> Option<String> {
    let cols = ans.first().map_or(0, Vec::len);
    (0..cols).find_map(|j| {
        let a: Vec<&str> = ans.iter().filter_map(|row| row.get(j)).map(String::as_str).collect();
        let r: Vec<&str> = res.iter().filter_map(|row| row.get(j)).map(String::as_str).collect();
        (a != r).then(|| {
            format!(
                "Column {} does not match: Answer Column: {}, Response Column: {}",
                j + 1,
                render_cells(a.as_slice()),
                render_cells(r.as_slice())
            )
        })
    })
}
