use base64::Engine;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::{FromSqlError, ToSqlOutput, Value as SqlValue, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Format used when a timestamp is rendered as text
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A value that can be bound to a command parameter or read out of a row.
///
/// `Null` is the database null sentinel. It is what gets bound when a
/// caller has no value, so the driver always sees an explicit SQL NULL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DbValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    DateTime(NaiveDateTime),
}

impl DbValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DbValue::Null)
    }

    /// Name of the storage class, as SQLite reports it from `typeof()`
    pub fn type_name(&self) -> &'static str {
        match self {
            DbValue::Null => "null",
            DbValue::Integer(_) => "integer",
            DbValue::Real(_) => "real",
            DbValue::Text(_) | DbValue::DateTime(_) => "text",
            DbValue::Blob(_) => "blob",
        }
    }

    /// Convert to a JSON value. Blobs become base64 strings.
    pub fn to_json(&self) -> Value {
        match self {
            DbValue::Null => Value::Null,
            DbValue::Integer(i) => Value::Number((*i).into()),
            DbValue::Real(f) => Value::Number(Number::from_f64(*f).unwrap_or(Number::from(0))),
            DbValue::Text(s) => Value::String(s.clone()),
            DbValue::Blob(b) => {
                Value::String(base64::engine::general_purpose::STANDARD.encode(b))
            }
            DbValue::DateTime(dt) => Value::String(dt.format(DATE_TIME_FORMAT).to_string()),
        }
    }
}

/// Text must be valid UTF-8, the same rule the driver applies to `String` reads
impl TryFrom<ValueRef<'_>> for DbValue {
    type Error = FromSqlError;

    fn try_from(value: ValueRef<'_>) -> Result<Self, FromSqlError> {
        Ok(match value {
            ValueRef::Null => DbValue::Null,
            ValueRef::Integer(i) => DbValue::Integer(i),
            ValueRef::Real(f) => DbValue::Real(f),
            ValueRef::Text(_) => DbValue::Text(value.as_str()?.to_string()),
            ValueRef::Blob(b) => DbValue::Blob(b.to_vec()),
        })
    }
}

/// JSON parameters map the same way a JS driver would pass them
impl From<&Value> for DbValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => DbValue::Null,
            Value::Bool(b) => DbValue::Integer(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DbValue::Integer(i),
                None => DbValue::Real(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => DbValue::Text(s.clone()),
            // Arrays and objects are stored as their JSON text
            Value::Array(_) | Value::Object(_) => DbValue::Text(v.to_string()),
        }
    }
}

impl From<i32> for DbValue {
    fn from(v: i32) -> Self {
        DbValue::Integer(i64::from(v))
    }
}

impl From<i64> for DbValue {
    fn from(v: i64) -> Self {
        DbValue::Integer(v)
    }
}

impl From<u32> for DbValue {
    fn from(v: u32) -> Self {
        DbValue::Integer(i64::from(v))
    }
}

impl From<f64> for DbValue {
    fn from(v: f64) -> Self {
        DbValue::Real(v)
    }
}

impl From<bool> for DbValue {
    fn from(v: bool) -> Self {
        DbValue::Integer(i64::from(v))
    }
}

impl From<String> for DbValue {
    fn from(v: String) -> Self {
        DbValue::Text(v)
    }
}

impl From<&str> for DbValue {
    fn from(v: &str) -> Self {
        DbValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for DbValue {
    fn from(v: Vec<u8>) -> Self {
        DbValue::Blob(v)
    }
}

impl From<&[u8]> for DbValue {
    fn from(v: &[u8]) -> Self {
        DbValue::Blob(v.to_vec())
    }
}

impl From<NaiveDateTime> for DbValue {
    fn from(v: NaiveDateTime) -> Self {
        DbValue::DateTime(v)
    }
}

impl From<DateTime<Utc>> for DbValue {
    fn from(v: DateTime<Utc>) -> Self {
        DbValue::DateTime(v.naive_utc())
    }
}

impl ToSql for DbValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            DbValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            DbValue::Integer(i) => Ok(ToSqlOutput::from(*i)),
            DbValue::Real(f) => Ok(ToSqlOutput::from(*f)),
            DbValue::Text(s) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes()))),
            DbValue::Blob(b) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(b))),
            DbValue::DateTime(dt) => Ok(ToSqlOutput::from(
                dt.format(DATE_TIME_FORMAT).to_string(),
            )),
        }
    }
}
