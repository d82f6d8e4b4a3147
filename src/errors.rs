use thiserror::Error;

use crate::validate::StructureFault;

/// Which operand a conversion failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Response,
    Answer,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Response => f.write_str("response"),
            Side::Answer => f.write_str("answer"),
        }
    }
}

// Fatal grading errors. Anything wrong with the response is a graded result instead.
#[derive(Debug, Error)]
pub enum GradeError {
    // The reference answer failed structural validation
    #[error("Answer has empty fields: {0}")]
    InvalidAnswer(StructureFault),

    // An operand could not be coerced into a uniform grid of strings
    #[error("Failed to convert {side} to string arrays: {reason}")]
    Conversion { side: Side, reason: String },
}

pub type Result<T> = std::result::Result<T, GradeError>;
