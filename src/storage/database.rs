//! SQLite-backed key-value persistence
//!
//! The active rate snapshot and the user's currency pair live under fixed
//! string keys and are reloaded verbatim at startup. Absent values fall
//! back to documented defaults at the call site.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::info;

use crate::rates::RateSnapshot;

/// Key for the persisted rate snapshot (JSON)
pub const KEY_EXCHANGE_RATES: &str = "exchange_rates";
/// Key for the chosen source currency code
pub const KEY_SOURCE_CURRENCY: &str = "source_currency";
/// Key for the chosen destination currency code
pub const KEY_DESTINATION_CURRENCY: &str = "destination_currency";

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at path and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {:?}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Read a raw value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a raw value under a key, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load the persisted rate snapshot, if any
    pub fn load_snapshot(&self) -> Result<Option<RateSnapshot>> {
        match self.get(KEY_EXCHANGE_RATES)? {
            Some(json) => {
                let snapshot =
                    serde_json::from_str(&json).context("Persisted rate snapshot is corrupt")?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Persist a rate snapshot wholesale
    pub fn save_snapshot(&self, snapshot: &RateSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.set(KEY_EXCHANGE_RATES, &json)?;
        info!(
            "Persisted rate snapshot ({} rates against {})",
            snapshot.rates.len(),
            snapshot.base_code
        );
        Ok(())
    }

    /// Load the persisted currency pair as (source, destination)
    pub fn load_currency_pair(&self) -> Result<(Option<String>, Option<String>)> {
        Ok((
            self.get(KEY_SOURCE_CURRENCY)?,
            self.get(KEY_DESTINATION_CURRENCY)?,
        ))
    }

    /// Persist the currency pair
    pub fn save_currency_pair(&self, source: &str, destination: &str) -> Result<()> {
        self.set(KEY_SOURCE_CURRENCY, source)?;
        self.set(KEY_DESTINATION_CURRENCY, destination)?;
        Ok(())
    }
}
