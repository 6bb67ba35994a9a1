//! Owned TOML document tree.
//!
//! Documents are decoded once into [`Value`] / [`Table`] and every query or
//! mutation works on this single representation. Tables are insertion
//! ordered so that a modified document re-encodes with its keys in the
//! order they were written.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use toml::value::Datetime;

/// A TOML table: string keys mapped to values, in insertion order.
pub type Table = IndexMap<String, Value>;

/// An owned TOML value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// TOML string
    String(String),
    /// TOML integer
    Integer(i64),
    /// TOML float
    Float(f64),
    /// TOML boolean
    Boolean(bool),
    /// TOML offset/local date-time, kept verbatim
    Datetime(Datetime),
    /// TOML array
    Array(Vec<Value>),
    /// TOML table (IndexMap preserves insertion order)
    Table(Table),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create an integer value.
    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    /// Create a float value.
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a boolean value.
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create an empty table.
    pub fn table() -> Self {
        Value::Table(Table::new())
    }

    /// Create a table from key-value pairs.
    pub fn table_from(pairs: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Table(pairs.into_iter().collect())
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    /// Check if this value is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Convert to a string reference, if possible.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to an i64, if possible.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Convert to an f64, if possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to a boolean, if possible.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a table reference, if possible.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// Decode a parsed `toml` table into a [`Table`].
pub fn table_from_toml(table: toml::Table) -> Table {
    table
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect()
}

/// Encode a [`Table`] as a `toml` table, keeping key order.
pub fn table_to_toml(table: &Table) -> toml::Table {
    let mut out = toml::Table::new();
    for (k, v) in table {
        out.insert(k.clone(), toml::Value::from(v));
    }
    out
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(n) => Value::Integer(n),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Boolean(b),
            toml::Value::Datetime(dt) => Value::Datetime(dt),
            toml::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            toml::Value::Table(t) => Value::Table(table_from_toml(t)),
        }
    }
}

impl From<&Value> for toml::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => toml::Value::String(s.clone()),
            Value::Integer(n) => toml::Value::Integer(*n),
            Value::Float(f) => toml::Value::Float(*f),
            Value::Boolean(b) => toml::Value::Boolean(*b),
            Value::Datetime(dt) => toml::Value::Datetime(*dt),
            Value::Array(arr) => toml::Value::Array(arr.iter().map(toml::Value::from).collect()),
            Value::Table(t) => toml::Value::Table(table_to_toml(t)),
        }
    }
}

/// JSON and YAML have no date-time type, so date-times serialize as their
/// TOML text. TOML output goes through [`table_to_toml`] instead.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Datetime(dt) => serializer.collect_str(dt),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Table(t) => {
                let mut map = serializer.serialize_map(Some(t.len()))?;
                for (k, v) in t {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(arr: Vec<T>) -> Self {
        Value::Array(arr.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Value::integer(42), Value::Integer(42));
        assert_eq!(Value::float(2.5), Value::Float(2.5));
        assert_eq!(Value::boolean(true), Value::Boolean(true));
        assert_eq!(Value::string("hello"), Value::String("hello".into()));
        assert_eq!(Value::table(), Value::Table(Table::new()));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::String("".into()).type_name(), "string");
        assert_eq!(Value::Integer(1).type_name(), "integer");
        assert_eq!(Value::Float(1.5).type_name(), "float");
        assert_eq!(Value::Boolean(false).type_name(), "boolean");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::table().type_name(), "table");
        let dt: Datetime = "1979-05-27T07:32:00Z".parse().unwrap();
        assert_eq!(Value::Datetime(dt).type_name(), "datetime");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(3.5).as_i64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::table().is_table());
        assert!(Value::from(vec![1i64, 2]).as_table().is_none());
    }

    #[test]
    fn test_toml_conversion_keeps_order() {
        let doc: toml::Table = toml::from_str("zeta = 1\nalpha = \"a\"\n[mid]\nx = true\n").unwrap();
        let table = table_from_toml(doc);
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let back = table_to_toml(&table);
        let keys: Vec<&str> = back.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(back["mid"]["x"].as_bool(), Some(true));
    }

    #[test]
    fn test_datetime_serializes_as_string() {
        let dt: Datetime = "1979-05-27T07:32:00Z".parse().unwrap();
        let json = serde_json::to_string(&Value::Datetime(dt)).unwrap();
        assert_eq!(json, "\"1979-05-27T07:32:00Z\"");
    }
}
