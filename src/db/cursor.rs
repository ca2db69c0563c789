//! Cursor module - the read side of a result set, positioned on one row

use chrono::NaiveDateTime;
use rusqlite::types::ValueRef;
use rusqlite::{Row, Statement};

/// A forward-only result cursor positioned on its current row.
///
/// Ordinals are zero-based. Implementations report their own errors and
/// the accessors in [`crate::utils`] pass them through untouched.
pub trait Cursor {
    type Error;

    /// Resolve a column name to its ordinal
    fn get_ordinal(&self, column: &str) -> Result<usize, Self::Error>;

    /// Whether the value at `ordinal` is SQL NULL
    fn is_null(&self, ordinal: usize) -> Result<bool, Self::Error>;

    fn get_text(&self, ordinal: usize) -> Result<String, Self::Error>;

    fn get_int32(&self, ordinal: usize) -> Result<i32, Self::Error>;

    fn get_date_time(&self, ordinal: usize) -> Result<NaiveDateTime, Self::Error>;
}

impl Cursor for Row<'_> {
    type Error = rusqlite::Error;

    fn get_ordinal(&self, column: &str) -> rusqlite::Result<usize> {
        let stmt: &Statement<'_> = self.as_ref();
        stmt.column_index(column)
    }

    fn is_null(&self, ordinal: usize) -> rusqlite::Result<bool> {
        Ok(matches!(self.get_ref(ordinal)?, ValueRef::Null))
    }

    fn get_text(&self, ordinal: usize) -> rusqlite::Result<String> {
        self.get(ordinal)
    }

    fn get_int32(&self, ordinal: usize) -> rusqlite::Result<i32> {
        self.get(ordinal)
    }

    fn get_date_time(&self, ordinal: usize) -> rusqlite::Result<NaiveDateTime> {
        self.get(ordinal)
    }
}
