/*!
 * Device-local history fallback store.
 *
 * Append-to-front list of translation records backed by SQLite, capped at a
 * fixed number of retained records per user. Anything older than the cap is
 * evicted on insert.
 */

use anyhow::Result;
use log::debug;
use rusqlite::params;

use crate::history::models::TranslationRecord;
use crate::storage::StorageConnection;

/// Default number of records retained per user
pub const DEFAULT_RETENTION_CAP: usize = 50;

/// Local history store with a per-user retention cap
#[derive(Clone)]
pub struct LocalHistoryStore {
    /// Database connection
    db: StorageConnection,
    /// Maximum retained records per user
    cap: usize,
}

impl LocalHistoryStore {
    /// Create a store with the given connection and the default cap
    pub fn new(db: StorageConnection) -> Self {
        Self::with_cap(db, DEFAULT_RETENTION_CAP)
    }

    /// Create a store with an explicit retention cap
    pub fn with_cap(db: StorageConnection, cap: usize) -> Self {
        Self { db, cap: cap.max(1) }
    }

    /// The underlying connection (shared with the session identity)
    pub fn connection(&self) -> &StorageConnection {
        &self.db
    }

    /// Append a record and evict anything beyond the retention cap.
    pub async fn append(&self, record: &TranslationRecord) -> Result<()> {
        let record = record.clone();
        let cap = self.cap as i64;

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO local_history (
                        id, user_id, original_text, translated_text,
                        source_language, target_language, image_data, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                    "#,
                    params![
                        record.id,
                        record.user_id,
                        record.original_text,
                        record.translated_text,
                        record.source_language,
                        record.target_language,
                        record.image_data,
                        record.created_at,
                    ],
                )?;

                // Evict oldest records beyond the cap for this user
                let evicted = conn.execute(
                    r#"
                    DELETE FROM local_history
                    WHERE user_id = ?1
                      AND id NOT IN (
                          SELECT id FROM local_history
                          WHERE user_id = ?1
                          ORDER BY created_at DESC, rowid DESC
                          LIMIT ?2
                      )
                    "#,
                    params![record.user_id, cap],
                )?;

                if evicted > 0 {
                    debug!("Evicted {} local history record(s) beyond cap", evicted);
                }

                Ok(())
            })
            .await
    }

    /// Read the full retained list for a user, most-recent first.
    pub async fn read_all(&self, user_id: &str) -> Result<Vec<TranslationRecord>> {
        let user_id = user_id.to_string();

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, user_id, original_text, translated_text,
                           source_language, target_language, image_data, created_at
                    FROM local_history
                    WHERE user_id = ?1
                    ORDER BY created_at DESC, rowid DESC
                    "#,
                )?;

                let records = stmt
                    .query_map([user_id], |row| {
                        Ok(TranslationRecord {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            original_text: row.get(2)?,
                            translated_text: row.get(3)?,
                            source_language: row.get(4)?,
                            target_language: row.get(5)?,
                            image_data: row.get(6)?,
                            created_at: row.get(7)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(records)
            })
            .await
    }
}
