//! Params module - the write side: binding named parameters to a command

use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Statement;

use crate::models::DbValue;

/// Prefixes SQLite accepts in front of a named parameter, in lookup order
const PARAMETER_PREFIXES: [char; 3] = [':', '@', '$'];

/// Regex for names that already carry a parameter prefix
static PREFIXED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[:@$?]").unwrap());

/// A parameterized command that accepts named values.
pub trait Command {
    type Error;

    /// Bind `value` to the parameter called `name`.
    ///
    /// `DbValue::Null` must be bound as SQL NULL, never treated as "not supplied".
    fn bind_value(&mut self, name: &str, value: DbValue) -> Result<(), Self::Error>;
}

/// Names to try when resolving `name` against a statement's parameters
///
/// A name with a prefix (`:id`, `@id`, `$id`, `?1`) is used as given. A bare
/// name (`id`) is tried with each SQLite prefix in turn.
///
/// # Arguments
/// * `name` - Parameter name as the caller spelled it
///
/// # Returns
/// Prefixed names in lookup order
pub fn parameter_name_candidates(name: &str) -> Vec<String> {
    if PREFIXED_NAME_REGEX.is_match(name) {
        return vec![name.to_string()];
    }
    PARAMETER_PREFIXES
        .iter()
        .map(|prefix| format!("{}{}", prefix, name))
        .collect()
}

/// Whether two spellings can resolve to the same statement parameter
///
/// `UserId` and `:UserId` match; `:UserId` and `@UserId` do not, since
/// SQLite treats those as different parameters.
///
/// # Arguments
/// * `a` - First parameter name
/// * `b` - Second parameter name
///
/// # Returns
/// true if the two names share a lookup candidate
pub fn parameter_names_match(a: &str, b: &str) -> bool {
    let left = parameter_name_candidates(a);
    parameter_name_candidates(b)
        .iter()
        .any(|candidate| left.contains(candidate))
}

/// Find the one-based index of a named parameter in a prepared statement
///
/// # Arguments
/// * `stmt` - The prepared statement
/// * `name` - Parameter name, bare or prefixed
///
/// # Returns
/// The parameter's one-based index, or `InvalidParameterName` when no
/// candidate from [`parameter_name_candidates`] exists in the statement
pub fn parameter_index(stmt: &Statement<'_>, name: &str) -> rusqlite::Result<usize> {
    for candidate in parameter_name_candidates(name) {
        if let Some(index) = stmt.parameter_index(&candidate)? {
            return Ok(index);
        }
    }
    Err(rusqlite::Error::InvalidParameterName(name.to_string()))
}

impl Command for Statement<'_> {
    type Error = rusqlite::Error;

    fn bind_value(&mut self, name: &str, value: DbValue) -> rusqlite::Result<()> {
        let index = parameter_index(self, name)?;
        self.raw_bind_parameter(index, value)
    }
}
