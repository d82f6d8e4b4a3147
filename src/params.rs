use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Grading parameters supplied alongside each submission.
/// No option is recognized yet; unknown keys are kept so callers can round-trip them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse params from a JSON object string. `null` yields the defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        let v: Value = serde_json::from_str(s)?;
        Self::from_value(v)
    }

    pub fn from_value(v: Value) -> serde_json::Result<Self> {
        match v {
            Value::Null => Ok(Self::default()),
            other => serde_json::from_value(other),
        }
    }
}
