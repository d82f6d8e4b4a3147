use itertools::Itertools;
use serde_json::Value;

/// An operand coerced into a uniform grid of stringified cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid {
    /// A top-level scalar, `null` included.
    Scalar(String),
    Vector(Vec<String>),
    /// Rectangular: every row holds exactly `cols` cells.
    Matrix { rows: Vec<Vec<String>>, cols: usize },
}

impl Grid {
    /// Coerce a JSON value into a grid. The error string says why the value is not rectangular.
    /// Objects are cells like any scalar, stringified as dict literals.
    pub fn from_value(v: &Value) -> Result<Self, String> {
        let items = match v {
            Value::Array(items) => items,
            scalar => return Ok(Grid::Scalar(cell_string(scalar).unwrap_or_default())),
        };

        let nested = items.iter().filter(|x| x.is_array()).count();
        if nested == 0 {
            let cells = items
                .iter()
                .enumerate()
                .map(|(i, x)| cell_string(x).ok_or_else(|| format!("element {i} is not a scalar")))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Grid::Vector(cells));
        }
        if nested != items.len() {
            return Err("rows mix scalars and sequences".into());
        }

        let mut rows = Vec::with_capacity(items.len());
        let mut cols = None;
        for (i, row) in items.iter().filter_map(Value::as_array).enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(j, x)| {
                    cell_string(x).ok_or_else(|| format!("element [{i}][{j}] is not a scalar"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            match cols {
                None => cols = Some(cells.len()),
                Some(c) if c != cells.len() => {
                    return Err(format!(
                        "inhomogeneous shape: row {i} has {} columns, expected {c}",
                        cells.len()
                    ))
                }
                Some(_) => {}
            }
            rows.push(cells);
        }
        Ok(Grid::Matrix { rows, cols: cols.unwrap_or(0) })
    }

    /// Dimension list: `[]`, `[len]` or `[rows, cols]`.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Grid::Scalar(_) => vec![],
            Grid::Vector(cells) => vec![cells.len()],
            Grid::Matrix { rows, cols } => vec![rows.len(), *cols],
        }
    }
}

/// Stringify a cell. Sequences have no cell form.
pub fn cell_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Array(_) => None,
        other => Some(repr_value(other)),
    }
}

// Literal form of a value nested inside a cell: strings quoted, objects as `{'k': v}`.
// Keys come out in serde_json's map order, which is sorted.
fn repr_value(v: &Value) -> String {
    match v {
        Value::Null => "None".into(),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => float_repr(f),
            _ => n.to_string(),
        },
        Value::String(s) => quote_cell(s),
        Value::Array(items) => format!("[{}]", items.iter().map(repr_value).join(", ")),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter().map(|(k, v)| format!("{}: {}", quote_cell(k), repr_value(v))).join(", ")
        ),
    }
}

/// Shortest round-trip float text: scientific with a signed two-digit exponent
/// below 1e-4 or from 1e16 up, otherwise decimal with at least one fractional digit.
pub fn float_repr(f: f64) -> String {
    if !f.is_finite() {
        return match f {
            f if f.is_nan() => "nan".into(),
            f if f > 0.0 => "inf".into(),
            _ => "-inf".into(),
        };
    }
    let sci = format!("{f:e}");
    if let Some((mantissa, exp)) = sci.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.abs());
            }
        }
    }
    let plain = f.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Render cells as `['1' '0' '0']`.
///
/// Always a single line: long rows are not wrapped at 75 columns the way
/// numpy's array printer would wrap them.
pub fn render_cells<S: AsRef<str>>(cells: &[S]) -> String {
    format!("[{}]", cells.iter().map(|c| quote_cell(c.as_ref())).join(" "))
}

fn quote_cell(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}
