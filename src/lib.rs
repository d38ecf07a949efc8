pub mod commands;
pub mod db;
pub mod error;

pub use commands::{Command, Outcome};
pub use db::{Bookmark, Criteria, Db, Record, SortColumn};
pub use error::{Error, Result};
