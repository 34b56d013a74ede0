//! Preference Repository
//!
//! SQLite-backed [`PreferenceStore`]. Booleans are stored as 0/1.
//!
//! When the database cannot be opened the app keeps running on an in-memory
//! store, so the flag reads as first launch and onboarding is shown.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};
use wallet_flow::{MemoryPreferences, PreferenceStore, StoreError};

use super::db::init_db;
use crate::domain::DomainResult;

pub struct SqlitePreferences {
    conn: Connection,
}

impl SqlitePreferences {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceStore for SqlitePreferences {
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, StoreError> {
        let value: Option<i64> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE namespace = ?1 AND key = ?2",
                params![namespace, key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match value {
            None => Ok(None),
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            Some(other) => Err(StoreError::Corrupt {
                key: format!("{}.{}", namespace, key),
                value: other.to_string(),
            }),
        }
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO preferences (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![namespace, key, value as i64, chrono::Utc::now().timestamp_millis()],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        log::debug!("Stored {}.{} = {}", namespace, key, value);
        Ok(())
    }
}

/// Preference store managed by the app
pub enum AppPreferences {
    Sqlite(SqlitePreferences),
    /// Database unavailable; nothing survives a restart
    Memory(MemoryPreferences),
}

impl AppPreferences {
    /// Open the database at `db_path`, falling back to memory on any failure
    pub fn open(db_path: DomainResult<PathBuf>) -> Self {
        match db_path.and_then(|path| init_db(&path).map(|conn| (conn, path))) {
            Ok((conn, path)) => {
                log::info!("Opened preferences at {}", path.display());
                AppPreferences::Sqlite(SqlitePreferences::new(conn))
            }
            Err(e) => {
                let _ = rolling_logger::error(&format!(
                    "Preferences unavailable, using memory store: {}",
                    e
                ));
                AppPreferences::Memory(MemoryPreferences::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, AppPreferences::Sqlite(_))
    }
}

impl PreferenceStore for AppPreferences {
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, StoreError> {
        match self {
            AppPreferences::Sqlite(store) => store.get_bool(namespace, key),
            AppPreferences::Memory(store) => store.get_bool(namespace, key),
        }
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError> {
        match self {
            AppPreferences::Sqlite(store) => store.put_bool(namespace, key, value),
            AppPreferences::Memory(store) => store.put_bool(namespace, key, value),
        }
    }
}
