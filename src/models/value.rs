//! A single cell of a positional record.
//!
//! The storage layer hands rows over as ordered cells with no names attached.
//! Cells are kept loosely typed: historical data mixes text, integers and
//! floats in the same columns.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Shared null cell returned for out-of-range reads.
pub static NULL: Value = Value::Null;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A cell "carries data" when it is not null and not an empty string.
    /// Whitespace-only text still counts as present here; the compliance
    /// check applies its own, stricter blank rule.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Textual form of the cell, `None` for null.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// Like [`Value::as_text`] but empty strings become `None`.
    pub fn as_present_text(&self) -> Option<String> {
        if self.is_present() {
            self.as_text()
        } else {
            None
        }
    }

    /// Lenient float conversion: numeric cells and numeric-looking text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Null => None,
        }
    }

    /// Truthiness as the storage layer encodes flags (0/1, "0"/"1", "").
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Integer(i) => *i != 0,
            Value::Real(f) => *f != 0.0,
            Value::Text(s) => !s.is_empty() && s.trim() != "0",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Real(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            // blobs never appear in fleet tables; keep them readable anyway
            ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
        })
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_rules() {
        assert!(!Value::Null.is_present());
        assert!(!Value::from("").is_present());
        assert!(Value::from(" ").is_present());
        assert!(Value::from(0i64).is_present());
    }

    #[test]
    fn json_cells_map_to_variants() {
        let cells: Vec<Value> = serde_json::from_str(r#"[null, 3, 1.5, "x"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                Value::Null,
                Value::Integer(3),
                Value::Real(1.5),
                Value::Text("x".into())
            ]
        );
    }

    #[test]
    fn nan_renders_as_nan_text() {
        let v = Value::Real(f64::NAN);
        assert!(v.as_text().unwrap().eq_ignore_ascii_case("nan"));
    }

    #[test]
    fn truthiness_follows_flag_encoding() {
        assert!(Value::Integer(1).is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(!Value::Null.is_truthy());
    }
}
