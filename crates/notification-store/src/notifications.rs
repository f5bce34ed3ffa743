//! Raw notification records in arrival order.

use notification_model::RawNotification;
use rusqlite::OptionalExtension;

use crate::{Database, StoreError};

impl Database {
    /// Stores `record`, replacing the payload of an existing id.
    /// Returns `true` when the id was not stored before.
    pub fn upsert_notification(&self, record: &RawNotification) -> Result<bool, StoreError> {
        if record.id.is_empty() {
            return Err(StoreError::InvalidData("notification id is empty".into()));
        }
        let payload = serde_json::to_string(record)?;

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let inserted = tx.execute(
                "INSERT OR IGNORE INTO notifications (id, payload) VALUES (?1, ?2)",
                rusqlite::params![record.id, payload],
            )? == 1;
            if !inserted {
                tx.execute(
                    "UPDATE notifications SET payload = ?2 WHERE id = ?1",
                    rusqlite::params![record.id, payload],
                )?;
            }
            tx.commit()?;
            Ok(inserted)
        })
    }

    /// All records in the order they first arrived.
    pub fn list_notifications(&self) -> Result<Vec<RawNotification>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT payload FROM notifications ORDER BY seq")?;
            let payloads = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            payloads
                .iter()
                .map(|p| serde_json::from_str::<RawNotification>(p).map_err(StoreError::from))
                .collect()
        })
    }

    pub fn get_notification(&self, id: &str) -> Result<Option<RawNotification>, StoreError> {
        let payload = self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT payload FROM notifications WHERE id = ?1")?;
            let payload = stmt
                .query_row([id], |row| row.get::<_, String>(0))
                .optional()?;
            Ok(payload)
        })?;
        payload
            .map(|p| serde_json::from_str::<RawNotification>(&p).map_err(StoreError::from))
            .transpose()
    }

    pub fn notification_count(&self) -> Result<usize, StoreError> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM notifications", [], |row| row.get(0))?;
            Ok(count as usize)
        })
    }
}
