/*!
 * Translation history persistence.
 *
 * Remote-first with a device-local fallback: every record attempt goes to the
 * hosted store when one is configured, and any failure there degrades to the
 * local capped store. Neither `record` nor `list` ever fails the caller; the
 * worst case is a logged `Discarded` outcome or an empty list.
 */

pub mod local;
pub mod models;
pub mod remote;

use log::{error, info, warn};
use std::sync::Arc;

pub use local::{DEFAULT_RETENTION_CAP, LocalHistoryStore};
pub use models::{PersistTarget, RecordOutcome, TranslationRecord};
pub use remote::{RemoteRecordService, RestRecordService};

/// Parameters for one persistence attempt
#[derive(Debug, Clone)]
pub struct RecordParams {
    /// Owning user id
    pub user_id: String,
    /// Input text as given
    pub original_text: String,
    /// Resolved output (or the not-found sentinel)
    pub translated_text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
    /// Encoded image payload for camera-originated attempts
    pub image_data: Option<String>,
}

/// History store delegating remote-first, local on any remote failure
pub struct HistoryStore {
    /// Hosted record service; absent when the deployment has no remote store
    remote: Option<Arc<dyn RemoteRecordService>>,
    /// Device-local fallback, treated as always available
    local: LocalHistoryStore,
}

impl HistoryStore {
    /// Create a store with a hosted primary and a local fallback
    pub fn new(remote: Arc<dyn RemoteRecordService>, local: LocalHistoryStore) -> Self {
        Self {
            remote: Some(remote),
            local,
        }
    }

    /// Create a store that writes straight to the local backend
    pub fn local_only(local: LocalHistoryStore) -> Self {
        Self {
            remote: None,
            local,
        }
    }

    /// Persist one translation record.
    ///
    /// Tries the hosted store first; any failure there falls through to the
    /// local store. The record is never dropped silently — a `Discarded`
    /// outcome (local write refused too) is logged at error level.
    pub async fn record(&self, params: RecordParams) -> RecordOutcome {
        let record = TranslationRecord::new(
            params.user_id,
            params.original_text,
            params.translated_text,
            params.source_language,
            params.target_language,
            params.image_data,
        );

        if let Some(remote) = &self.remote {
            match remote.insert(&record).await {
                Ok(()) => {
                    info!("History record persisted remotely");
                    return RecordOutcome::Persisted(PersistTarget::Remote);
                }
                Err(e) => {
                    warn!("Remote history insert failed, falling back to local store: {}", e);
                }
            }
        }

        match self.local.append(&record).await {
            Ok(()) => RecordOutcome::Persisted(PersistTarget::Local),
            Err(e) => {
                error!("Local history append failed, record discarded: {}", e);
                RecordOutcome::Discarded
            }
        }
    }

    /// List a user's records, most-recent first, capped at `limit`.
    ///
    /// Queries the hosted store and falls back to the locally retained list
    /// on any failure. Never fails; a broken local read yields an empty list.
    pub async fn list(&self, user_id: &str, limit: usize) -> Vec<TranslationRecord> {
        if let Some(remote) = &self.remote {
            match remote.query(user_id, limit).await {
                Ok(records) => return records,
                Err(e) => {
                    warn!("Remote history query failed, reading local store: {}", e);
                }
            }
        }

        match self.local.read_all(user_id).await {
            Ok(mut records) => {
                records.truncate(limit);
                records
            }
            Err(e) => {
                error!("Local history read failed: {}", e);
                Vec::new()
            }
        }
    }
}
