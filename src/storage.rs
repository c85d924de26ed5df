use rusqlite::{Connection, OptionalExtension, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tauri::{AppHandle, Manager};

use crate::i18n::Language;
use crate::models::{CartItem, Order};

/// Storage keys shared with the original web storefront.
pub const CART_KEY: &str = "barrydiet_cart";
pub const LANG_KEY: &str = "barrydiet_lang";
pub const LAST_ORDER_KEY: &str = "barrydiet_last_order";

const SCHEMA: &str = "
    -- Browser-storage style key/value pairs
    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
";

/// Key/value storage with browser semantics: a durable store backed by a
/// SQLite file in the app data dir, and a transient store that lives and
/// dies with the process. All reads and writes fail open — the in-memory
/// cart stays authoritative for the session when storage misbehaves.
pub struct Storage {
    durable: Mutex<Connection>,
    transient: Mutex<Connection>,
}

impl Storage {
    pub fn new(app_handle: &AppHandle) -> Result<Self> {
        let app_dir = app_handle
            .path()
            .app_data_dir()
            .expect("Failed to get app data dir");

        std::fs::create_dir_all(&app_dir).expect("Failed to create app data directory");

        let db_path: PathBuf = app_dir.join("barrydiet.db");
        Self::open(&db_path)
    }

    /// Open a durable store at `path` with a fresh transient store.
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_connections(Connection::open(path)?, Connection::open_in_memory()?)
    }

    pub fn from_connections(durable: Connection, transient: Connection) -> Result<Self> {
        durable.execute_batch(SCHEMA)?;
        transient.execute_batch(SCHEMA)?;

        Ok(Storage {
            durable: Mutex::new(durable),
            transient: Mutex::new(transient),
        })
    }

    fn read(conn: &Mutex<Connection>, key: &str) -> Option<String> {
        let conn = conn.lock().ok()?;
        match conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(value) => value,
            Err(e) => {
                log::warn!("storage read failed for {key}: {e}");
                None
            }
        }
    }

    fn write(conn: &Mutex<Connection>, key: &str, value: &str) {
        let Ok(conn) = conn.lock() else { return };
        if let Err(e) = conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        ) {
            log::warn!("storage write failed for {key}: {e}");
        }
    }

    /// Restore the persisted cart snapshot. Missing or malformed data yields
    /// the empty snapshot, never an error.
    pub fn restore_cart(&self) -> Vec<CartItem> {
        let Some(raw) = Self::read(&self.durable, CART_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("discarding malformed cart snapshot: {e}");
                Vec::new()
            }
        }
    }

    pub fn save_cart(&self, items: &[CartItem]) {
        match serde_json::to_string(items) {
            Ok(json) => Self::write(&self.durable, CART_KEY, &json),
            Err(e) => log::warn!("failed to serialize cart snapshot: {e}"),
        }
    }

    /// Stored language preference; defaults to Arabic when absent or
    /// unrecognized.
    pub fn load_language(&self) -> Language {
        Self::read(&self.durable, LANG_KEY)
            .and_then(|raw| Language::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save_language(&self, lang: Language) {
        Self::write(&self.durable, LANG_KEY, lang.as_str());
    }

    /// Orders are written once at checkout and never read back.
    pub fn save_last_order(&self, order: &Order) {
        match serde_json::to_string(order) {
            Ok(json) => Self::write(&self.transient, LAST_ORDER_KEY, &json),
            Err(e) => log::warn!("failed to serialize order: {e}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn read_durable(&self, key: &str) -> Option<String> {
        Self::read(&self.durable, key)
    }

    #[cfg(test)]
    pub(crate) fn write_durable(&self, key: &str, value: &str) {
        Self::write(&self.durable, key, value)
    }

    #[cfg(test)]
    pub(crate) fn read_transient(&self, key: &str) -> Option<String> {
        Self::read(&self.transient, key)
    }

    #[cfg(test)]
    pub(crate) fn corrupt_durable(&self) {
        self.durable
            .lock()
            .unwrap()
            .execute_batch("DROP TABLE kv")
            .unwrap();
    }
}

pub trait StorageExt {
    fn storage(&self) -> &Storage;
}

impl StorageExt for AppHandle {
    fn storage(&self) -> &Storage {
        self.state::<Storage>().inner()
    }
}
