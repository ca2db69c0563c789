use thiserror::Error;

/// Errors raised by [`Record`](crate::db::Record) when used as a cursor
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column ordinal {ordinal} out of range (row has {len} columns)")]
    OrdinalOutOfRange { ordinal: usize, len: usize },

    #[error("column {ordinal} holds {found}, expected {expected}")]
    InvalidColumnType {
        ordinal: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("integer {value} at column {ordinal} does not fit in 32 bits")]
    IntegerOutOfRange { ordinal: usize, value: i64 },

    #[error("column {ordinal} is not a valid timestamp: {value}")]
    InvalidDateTime { ordinal: usize, value: String },

    #[error("record has {columns} column names but {values} values")]
    LengthMismatch { columns: usize, values: usize },
}
