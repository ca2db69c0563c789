//! Statement module - an owned command object with a parameter collection

use std::convert::Infallible;

use rusqlite::{Connection, Row, Statement};
use serde::{Deserialize, Serialize};

use super::{parameter_names_match, Command};
use crate::models::DbValue;

/// A named value waiting to be bound
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SqlParameter {
    pub name: String,
    pub value: DbValue,
}

/// SQL text plus the parameters collected for it.
///
/// Parameters are kept until the command runs, so the same command can be
/// executed more than once and inspected in between.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SqlCommand {
    text: String,
    parameters: Vec<SqlParameter>,
}

impl SqlCommand {
    pub fn new(text: impl Into<String>) -> Self {
        SqlCommand {
            text: text.into(),
            parameters: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &[SqlParameter] {
        &self.parameters
    }

    /// Look up a parameter by name, bare or prefixed
    pub fn parameter(&self, name: &str) -> Option<&DbValue> {
        self.parameters
            .iter()
            .find(|p| parameter_names_match(&p.name, name))
            .map(|p| &p.value)
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Run the command and return the number of changed rows
    pub fn execute(&self, conn: &Connection) -> rusqlite::Result<usize> {
        tracing::debug!(
            sql = %self.text,
            parameters = self.parameters.len(),
            "executing command"
        );
        let mut stmt = conn.prepare_cached(&self.text)?;
        self.bind_all(&mut stmt)?;
        stmt.raw_execute()
    }

    /// Run the command as a query, handing each row to `map` while the
    /// cursor is positioned on it
    pub fn execute_reader<T, F>(&self, conn: &Connection, mut map: F) -> rusqlite::Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        tracing::debug!(
            sql = %self.text,
            parameters = self.parameters.len(),
            "executing reader"
        );
        let mut stmt = conn.prepare_cached(&self.text)?;
        self.bind_all(&mut stmt)?;

        let mut results = Vec::new();
        let mut rows = stmt.raw_query();
        while let Some(row) = rows.next()? {
            results.push(map(row)?);
        }
        Ok(results)
    }

    fn bind_all(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<()> {
        for p in &self.parameters {
            stmt.bind_value(&p.name, p.value.clone())?;
        }
        Ok(())
    }
}

impl Command for SqlCommand {
    type Error = Infallible;

    /// Any earlier parameter that resolves to the same slot is dropped, so
    /// the most recent value is the one bound.
    fn bind_value(&mut self, name: &str, value: DbValue) -> Result<(), Infallible> {
        self.parameters.retain(|p| !parameter_names_match(&p.name, name));
        self.parameters.push(SqlParameter {
            name: name.to_string(),
            value,
        });
        Ok(())
    }
}
