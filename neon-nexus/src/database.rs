use crate::store::{KeyValueStore, StoreError};
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

const KV_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

pub struct SqliteStore {
    pub db_path: PathBuf,
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let is_new = !db_path.exists();
        let conn = Connection::open(db_path)?;

        // Optimize for local performance
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        conn.execute(KV_SCHEMA, [])?;

        if is_new {
            log::info!("Initialized key-value database at {}", db_path.display());
        }

        Ok(SqliteStore {
            db_path: db_path.to_path_buf(),
            conn,
        })
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(KV_SCHEMA, [])?;
        Ok(SqliteStore {
            db_path: PathBuf::from(":memory:"),
            conn,
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = chrono::Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, &now),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_overwrites_single_entry() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.set("blob", "[1]").unwrap();
        store.set("blob", "[2]").unwrap();

        assert_eq!(store.get("blob").unwrap().as_deref(), Some("[2]"));
        let rows: i64 = store
            .conn
            .query_row("SELECT count(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn missing_key_is_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vault").join("kv.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("k", "persisted").unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("persisted"));
    }
}
