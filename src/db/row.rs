//! Row module - owned row snapshots that can be read like a live cursor

use chrono::NaiveDateTime;
use rusqlite::types::ValueRef;
use rusqlite::{Row, Statement};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Cursor;
use crate::error::RecordError;
use crate::models::DbValue;

/// Text layouts SQLite uses for timestamps
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A single row detached from its statement.
///
/// Columns keep the order they had in the result set, so ordinals match
/// the ones the live row would have reported.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(try_from = "RecordParts")]
pub struct Record {
    columns: Vec<String>,
    values: Vec<DbValue>,
}

/// Serialized shape of a [`Record`], checked before it becomes one
#[derive(Deserialize)]
struct RecordParts {
    columns: Vec<String>,
    values: Vec<DbValue>,
}

impl TryFrom<RecordParts> for Record {
    type Error = RecordError;

    fn try_from(parts: RecordParts) -> Result<Self, RecordError> {
        if parts.columns.len() != parts.values.len() {
            return Err(RecordError::LengthMismatch {
                columns: parts.columns.len(),
                values: parts.values.len(),
            });
        }
        Ok(Record {
            columns: parts.columns,
            values: parts.values,
        })
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    pub fn with_value(mut self, column: impl Into<String>, value: impl Into<DbValue>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    /// Copy every column of the current row
    ///
    /// # Arguments
    /// * `row` - The row the cursor is positioned on
    ///
    /// # Returns
    /// A record holding the row's column names and values, in result-set
    /// order. Text that is not valid UTF-8 fails with the same error a live
    /// `String` read reports, so a snapshot never rewrites a value.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let stmt: &Statement<'_> = row.as_ref();
        let mut record = Record::new();
        for i in 0..stmt.column_count() {
            let name = stmt.column_name(i)?.to_string();
            let value = match row.get_ref(i)? {
                ValueRef::Text(_) => DbValue::Text(row.get(i)?),
                other => DbValue::try_from(other).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(i, other.data_type(), Box::new(e))
                })?,
            };
            record.columns.push(name);
            record.values.push(value);
        }
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn value(&self, ordinal: usize) -> Result<&DbValue, RecordError> {
        self.values
            .get(ordinal)
            .ok_or(RecordError::OrdinalOutOfRange {
                ordinal,
                len: self.values.len(),
            })
    }

    /// Render the row as a JSON object keyed by column name
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.columns.iter().zip(&self.values) {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

fn mismatch(ordinal: usize, expected: &'static str, found: &DbValue) -> RecordError {
    RecordError::InvalidColumnType {
        ordinal,
        expected,
        found: found.type_name(),
    }
}

impl Cursor for Record {
    type Error = RecordError;

    fn get_ordinal(&self, column: &str) -> Result<usize, RecordError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(column))
            })
            .ok_or_else(|| RecordError::ColumnNotFound(column.to_string()))
    }

    fn is_null(&self, ordinal: usize) -> Result<bool, RecordError> {
        Ok(self.value(ordinal)?.is_null())
    }

    fn get_text(&self, ordinal: usize) -> Result<String, RecordError> {
        match self.value(ordinal)? {
            DbValue::Text(s) => Ok(s.clone()),
            other => Err(mismatch(ordinal, "text", other)),
        }
    }

    fn get_int32(&self, ordinal: usize) -> Result<i32, RecordError> {
        match self.value(ordinal)? {
            DbValue::Integer(i) => i32::try_from(*i).map_err(|_| RecordError::IntegerOutOfRange {
                ordinal,
                value: *i,
            }),
            other => Err(mismatch(ordinal, "integer", other)),
        }
    }

    fn get_date_time(&self, ordinal: usize) -> Result<NaiveDateTime, RecordError> {
        match self.value(ordinal)? {
            DbValue::DateTime(dt) => Ok(*dt),
            DbValue::Text(s) => DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .ok_or_else(|| RecordError::InvalidDateTime {
                    ordinal,
                    value: s.clone(),
                }),
            other => Err(mismatch(ordinal, "text", other)),
        }
    }
}
