//! Database Connection and Setup
//!
//! Opens the SQLite file and runs migrations.

use rusqlite::Connection;
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Open (or create) the database at `db_path` and bring its schema up to date.
/// `:memory:` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Storage(format!("Failed to open {}: {}", db_path.display(), e)))?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Check if a table exists
fn table_exists(conn: &Connection, table: &str) -> DomainResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Run database migrations
pub(crate) fn run_migrations(conn: &Connection) -> DomainResult<()> {
    if !table_exists(conn, "preferences")? {
        log::info!("Creating preferences table");
    }

    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            value INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            PRIMARY KEY (namespace, key)
        )",
        (),
    )?;

    Ok(())
}
