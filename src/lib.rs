pub mod db;
pub mod error;
pub mod models;
pub mod utils;

pub use db::{Command, Cursor, Record, SqlCommand, SqlParameter};
pub use error::RecordError;
pub use models::DbValue;
pub use utils::{
    add_parameter, get_date_time, get_int, get_nullable_int, get_string, is_db_null,
    is_not_db_null,
};

