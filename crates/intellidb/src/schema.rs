//! Schema probing against the host application's database.

use std::path::{Path, PathBuf};

use crate::prelude::*;

/// Capability for inspecting the database schema.
///
/// The pipeline issues at most one existence check and one column listing
/// per invocation, before any network call is made.
pub trait SchemaProbe {
    /// Whether a table with the given name exists.
    fn table_exists(&self, table: &str) -> Result<bool, Error>;

    /// Column names of the given table, in schema order.
    fn list_columns(&self, table: &str) -> Result<Vec<String>, Error>;
}

/// Schema probe backed by a SQLite database file.
///
/// The connection is opened read-only per query, so constructing the probe
/// touches nothing on disk; a missing database file only surfaces when a
/// table was actually referenced.
pub struct SqliteProbe {
    path: PathBuf,
}

impl SqliteProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<rusqlite::Connection, Error> {
        let connection = rusqlite::Connection::open_with_flags(
            &self.path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        )
        .map_err(|e| {
            Error::Database(format!("failed to open '{}': {e}", self.path.display()))
        })?;

        Ok(connection)
    }
}

impl SchemaProbe for SqliteProbe {
    fn table_exists(&self, table: &str) -> Result<bool, Error> {
        let connection = self.connect()?;
        let mut statement = connection
            .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;

        Ok(statement.exists([table])?)
    }

    fn list_columns(&self, table: &str) -> Result<Vec<String>, Error> {
        let connection = self.connect()?;
        let mut statement =
            connection.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;

        let rows = statement.query_map([table], |row| row.get::<_, String>(0))?;

        let mut columns = Vec::new();
        for column in rows {
            columns.push(column?);
        }

        Ok(columns)
    }
}

/// Static probe for tests elsewhere in this crate.
#[cfg(test)]
pub struct FixedProbe {
    pub tables: std::collections::HashMap<String, Vec<String>>,
}

#[cfg(test)]
impl FixedProbe {
    pub fn with_table(name: &str, columns: &[&str]) -> Self {
        let mut tables = std::collections::HashMap::new();
        tables.insert(
            name.to_string(),
            columns.iter().map(|c| c.to_string()).collect(),
        );
        Self { tables }
    }

    pub fn empty() -> Self {
        Self {
            tables: std::collections::HashMap::new(),
        }
    }
}

#[cfg(test)]
impl SchemaProbe for FixedProbe {
    fn table_exists(&self, table: &str) -> Result<bool, Error> {
        Ok(self.tables.contains_key(table))
    }

    fn list_columns(&self, table: &str) -> Result<Vec<String>, Error> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| Error::SchemaNotFound(table.to_string()))
    }
}
