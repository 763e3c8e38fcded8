//! Typed accessors over a `serde_json::Value` tree
//!
//! The decoder never pattern-matches on raw JSON. It walks the document
//! through [`JsonObject`] and [`JsonArray`], which carry the path walked so
//! far so that every failure names the exact location (`header.tempo`,
//! `body[12][0][3]`, ...).

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("missing key `{path}`")]
    MissingKey { path: String },

    #[error("`{path}` should be {expected}, found {found}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{path}` is out of bounds (length {len})")]
    IndexOutOfBounds { path: String, len: usize },

    #[error("invalid value at `{path}`: {reason}")]
    InvalidValue { path: String, reason: String },
}

impl AccessError {
    pub fn path(&self) -> &str {
        match self {
            AccessError::MissingKey { path }
            | AccessError::WrongType { path, .. }
            | AccessError::IndexOutOfBounds { path, .. }
            | AccessError::InvalidValue { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn wrong_type(path: String, expected: &'static str, value: &Value) -> AccessError {
    AccessError::WrongType {
        path,
        expected,
        found: type_name(value),
    }
}

/// Read an integer the way VMF writers emit them
///
/// Integral numbers are taken as-is. Fractional numbers and numeric strings
/// are accepted and truncated toward zero.
fn int_from_value(value: &Value, path: &str) -> Result<i64> {
    let invalid = |reason: String| AccessError::InvalidValue {
        path: path.to_string(),
        reason,
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                truncate(f).ok_or_else(|| invalid(format!("{} does not fit in an integer", n)))
            } else {
                Err(invalid(format!("{} is not an integer", n)))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(truncate)
            .ok_or_else(|| invalid(format!("\"{}\" is not a number", s))),
        other => Err(wrong_type(path.to_string(), "an integer", other)),
    }
}

fn truncate(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t < i64::MIN as f64 || t > i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

fn narrow<T: TryFrom<i64>>(value: i64, path: &str, range: &str) -> Result<T> {
    T::try_from(value).map_err(|_| AccessError::InvalidValue {
        path: path.to_string(),
        reason: format!("{} is outside {}", value, range),
    })
}

/// A JSON object together with its location in the document
#[derive(Debug, Clone)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> JsonObject<'a> {
    /// Wrap the document root
    pub fn root(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: String::new(),
            }),
            other => Err(wrong_type("<root>".to_string(), "an object", other)),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&self, key: &str) -> Result<(&'a Value, String)> {
        let path = self.child_path(key);
        match self.map.get(key) {
            Some(value) => Ok((value, path)),
            None => Err(AccessError::MissingKey { path }),
        }
    }

    pub fn get_object(&self, key: &str) -> Result<JsonObject<'a>> {
        let (value, path) = self.get(key)?;
        match value {
            Value::Object(map) => Ok(JsonObject { map, path }),
            other => Err(wrong_type(path, "an object", other)),
        }
    }

    pub fn get_array(&self, key: &str) -> Result<JsonArray<'a>> {
        let (value, path) = self.get(key)?;
        match value {
            Value::Array(items) => Ok(JsonArray { items, path }),
            other => Err(wrong_type(path, "an array", other)),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<&'a str> {
        let (value, path) = self.get(key)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type(path, "a string", value))
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        let (value, path) = self.get(key)?;
        int_from_value(value, &path)
    }

    pub fn get_i32(&self, key: &str) -> Result<i32> {
        let (value, path) = self.get(key)?;
        narrow(int_from_value(value, &path)?, &path, "the 32-bit integer range")
    }

    pub fn number_of_keys(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.map.keys().map(String::as_str)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A JSON array together with its location in the document
#[derive(Debug, Clone)]
pub struct JsonArray<'a> {
    items: &'a [Value],
    path: String,
}

impl<'a> JsonArray<'a> {
    fn child_path(&self, index: usize) -> String {
        format!("{}[{}]", self.path, index)
    }

    fn get(&self, index: usize) -> Result<(&'a Value, String)> {
        let path = self.child_path(index);
        match self.items.get(index) {
            Some(value) => Ok((value, path)),
            None => Err(AccessError::IndexOutOfBounds {
                path,
                len: self.items.len(),
            }),
        }
    }

    pub fn get_array(&self, index: usize) -> Result<JsonArray<'a>> {
        let (value, path) = self.get(index)?;
        match value {
            Value::Array(items) => Ok(JsonArray { items, path }),
            other => Err(wrong_type(path, "an array", other)),
        }
    }

    pub fn get_int(&self, index: usize) -> Result<i64> {
        let (value, path) = self.get(index)?;
        int_from_value(value, &path)
    }

    pub fn get_i32(&self, index: usize) -> Result<i32> {
        let (value, path) = self.get(index)?;
        narrow(int_from_value(value, &path)?, &path, "the 32-bit integer range")
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Measure keys are numeric strings; any fractional part is dropped
pub fn parse_measure(key: &str, map_path: &str) -> Result<u32> {
    let path = format!("{}.{}", map_path, key);
    let value = key
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(truncate)
        .ok_or_else(|| AccessError::InvalidValue {
            path: path.clone(),
            reason: format!("measure \"{}\" is not a number", key),
        })?;
    narrow(value, &path, "the measure range 0..=4294967295")
}
