pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;

pub use models::*;

/// Database connection wrapper
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Open a connection to the database at the given path
    /// Creates the database file if it doesn't exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Enable WAL mode for better concurrency
        let _ = conn.execute("PRAGMA journal_mode=WAL", []);

        Ok(Db { conn })
    }

    /// Open an in-memory database for testing
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }

    /// Close the connection, surfacing any flush error
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Db(e))
    }

    /// Get the current time as ISO 8601 string
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// Create a table from its schema descriptor, idempotently
    pub fn create_table(&self, table: &TableSchema) -> Result<()> {
        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.decl))
            .collect();
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            table.name,
            columns.join(", ")
        );
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Insert one row. Column names are trusted identifiers; every value is
    /// passed as a bound parameter, never spliced into the statement text.
    /// Returns the rowid assigned by the store.
    pub fn insert(&self, table: &str, record: &Record) -> Result<i64> {
        let columns: Vec<&str> = record.columns().collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders.join(", ")
        );
        self.conn.execute(&sql, params_from_iter(record.values()))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete rows matching the AND-combined criteria. Matching zero rows is
    /// not an error; empty criteria is rejected rather than deleting the
    /// whole table.
    pub fn delete(&self, table: &str, criteria: &Criteria) -> Result<usize> {
        if criteria.is_empty() {
            return Err(Error::empty_criteria(table));
        }
        let sql = format!("DELETE FROM {} WHERE {}", table, criteria.clause());
        Ok(self
            .conn
            .execute(&sql, params_from_iter(criteria.values()))?)
    }

    /// Select rows, optionally filtered and ordered. Each row is the full
    /// column tuple in table column order. An empty or absent criteria means
    /// no WHERE clause; an empty order list means no ORDER BY clause.
    pub fn select(
        &self,
        table: &str,
        criteria: Option<&Criteria>,
        order_by: &[&str],
    ) -> Result<Vec<Vec<Value>>> {
        let filter = criteria.filter(|c| !c.is_empty());

        let mut sql = format!("SELECT * FROM {table}");
        if let Some(c) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&c.clause());
        }
        if !order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order_by.join(", "));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let column_count = stmt.column_count();
        let params: Vec<&Value> = filter.map(|c| c.values().collect()).unwrap_or_default();

        let rows = stmt
            .query_map(params_from_iter(params), |row| {
                (0..column_count)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<std::result::Result<Vec<_>, _>>()
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

/// Ordered column declarations for one table
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

/// A single column: name plus its type-and-constraint declaration
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: &'static str,
    pub decl: &'static str,
}

impl TableSchema {
    pub fn new(name: &'static str) -> Self {
        TableSchema {
            name,
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, name: &'static str, decl: &'static str) -> Self {
        self.columns.push(ColumnDef { name, decl });
        self
    }
}

/// Ordered column/value pairs for an insert
#[derive(Debug, Clone, Default)]
pub struct Record(Vec<(&'static str, Value)>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((column, value.into()));
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(c, _)| *c)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }
}

/// AND-combined column = value constraints for delete/select
#[derive(Debug, Clone, Default)]
pub struct Criteria(Vec<(&'static str, Value)>);

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the WHERE body with positional placeholders
    fn clause(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, (c, _))| format!("{} = ?{}", c, i + 1))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }
}
