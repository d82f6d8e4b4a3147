use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    /// Blank after trimming.
    Empty,
    /// Non-blank but not parseable as a float.
    NotNumeric(String),
}

/// First offending leaf found while walking a nested sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFault {
    /// Index path from the root, e.g. `[1, 2]` for `value[1][2]`.
    pub path: Vec<usize>,
    pub kind: FaultKind,
}

impl fmt::Display for StructureFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FaultKind::Empty => f.write_str("empty value at ")?,
            FaultKind::NotNumeric(s) => write!(f, "non-numeric value {s:?} at ")?,
        }
        if self.path.is_empty() {
            return f.write_str("root");
        }
        for i in &self.path {
            write!(f, "[{i}]")?;
        }
        Ok(())
    }
}

/// True when every string leaf of `element` is non-blank and numeric.
pub fn validate_structure(element: &Value) -> bool {
    check_structure(element).is_ok()
}

/// Walk `element` depth-first and stop at the first bad leaf.
/// Non-string scalars, including `null`, are accepted as-is.
pub fn check_structure(element: &Value) -> Result<(), StructureFault> {
    let mut path = Vec::new();
    walk(element, &mut path)
}

fn walk(element: &Value, path: &mut Vec<usize>) -> Result<(), StructureFault> {
    match element {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push(i);
                walk(item, path)?;
                path.pop();
            }
            Ok(())
        }
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                return Err(StructureFault { path: path.clone(), kind: FaultKind::Empty });
            }
            // Rust float syntax: digit separators (`1_000`) and non-ASCII digits are rejected.
            if t.parse::<f64>().is_err() {
                return Err(StructureFault {
                    path: path.clone(),
                    kind: FaultKind::NotNumeric(t.to_string()),
                });
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
