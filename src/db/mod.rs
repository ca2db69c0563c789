//! Database module - cursor and command seams plus their SQLite implementations

mod cursor;
mod params;
mod row;
mod statement;

pub use cursor::Cursor;
pub use params::{parameter_index, parameter_name_candidates, parameter_names_match, Command};
pub use row::Record;
pub use statement::{SqlCommand, SqlParameter};
