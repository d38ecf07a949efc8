use crate::db::{Db, TableSchema};
use crate::error::Result;

/// Name of the single bookmarks table
pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Column descriptors for the bookmarks table, in storage order
pub fn bookmarks_table() -> TableSchema {
    TableSchema::new(BOOKMARKS_TABLE)
        .column("id", "INTEGER PRIMARY KEY AUTOINCREMENT")
        .column("title", "TEXT NOT NULL")
        .column("url", "TEXT NOT NULL")
        .column("notes", "TEXT")
        .column("date_added", "TEXT NOT NULL")
}

/// Create the database schema
pub fn create_schema(db: &Db) -> Result<()> {
    db.create_table(&bookmarks_table())
}
