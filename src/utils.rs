//! Null-safe column accessors and parameter binding.
//!
//! Every function resolves the column by name first, then reads through the
//! cursor. Errors from the cursor or command come back exactly as raised.

use chrono::NaiveDateTime;

use crate::db::{Command, Cursor};
use crate::models::DbValue;

/// Read a text column, returning `None` for SQL NULL
pub fn get_string<C>(cursor: &C, column: &str) -> Result<Option<String>, C::Error>
where
    C: Cursor + ?Sized,
{
    let ordinal = cursor.get_ordinal(column)?;
    if cursor.is_null(ordinal)? {
        return Ok(None);
    }
    cursor.get_text(ordinal).map(Some)
}

/// Read a 32-bit integer column.
///
/// The value must not be NULL. A NULL is reported by the cursor's own typed
/// read error; nothing here checks for it.
pub fn get_int<C>(cursor: &C, column: &str) -> Result<i32, C::Error>
where
    C: Cursor + ?Sized,
{
    cursor.get_int32(cursor.get_ordinal(column)?)
}

/// Read a timestamp column. Same NULL contract as [`get_int`].
pub fn get_date_time<C>(cursor: &C, column: &str) -> Result<NaiveDateTime, C::Error>
where
    C: Cursor + ?Sized,
{
    cursor.get_date_time(cursor.get_ordinal(column)?)
}

/// Read a 32-bit integer column, returning `None` for SQL NULL
pub fn get_nullable_int<C>(cursor: &C, column: &str) -> Result<Option<i32>, C::Error>
where
    C: Cursor + ?Sized,
{
    let ordinal = cursor.get_ordinal(column)?;
    if cursor.is_null(ordinal)? {
        return Ok(None);
    }
    cursor.get_int32(ordinal).map(Some)
}

pub fn is_db_null<C>(cursor: &C, column: &str) -> Result<bool, C::Error>
where
    C: Cursor + ?Sized,
{
    cursor.is_null(cursor.get_ordinal(column)?)
}

pub fn is_not_db_null<C>(cursor: &C, column: &str) -> Result<bool, C::Error>
where
    C: Cursor + ?Sized,
{
    is_db_null(cursor, column).map(|null| !null)
}

/// Bind `value` to the named parameter of `command`.
///
/// `None` binds [`DbValue::Null`] so the parameter is always supplied, as SQL
/// NULL. `Some` values are bound as they are.
pub fn add_parameter<C, V>(command: &mut C, name: &str, value: Option<V>) -> Result<(), C::Error>
where
    C: Command + ?Sized,
    V: Into<DbValue>,
{
    let value = match value {
        Some(v) => v.into(),
        None => DbValue::Null,
    };
    tracing::trace!(
        parameter = name,
        null = value.is_null(),
        "binding command parameter"
    );
    command.bind_value(name, value)
}
