/*!
 * Translation history records and persistence outcomes.
 */

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// One resolved translation event.
///
/// Records are immutable after creation; the store that persisted a record
/// owns it from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRecord {
    /// Client-side record identifier (UUID)
    pub id: String,
    /// Stable per-device user identifier, never empty
    pub user_id: String,
    /// The input as given, pre-translation
    pub original_text: String,
    /// The resolved output; may hold the not-found sentinel
    pub translated_text: String,
    /// Source language code (e.g. "de")
    pub source_language: String,
    /// Target language code (e.g. "ko")
    pub target_language: String,
    /// Encoded image payload for camera-originated records
    pub image_data: Option<String>,
    /// Creation timestamp, RFC3339 UTC
    pub created_at: String,
}

impl TranslationRecord {
    /// Create a new record stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        image_data: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            image_data,
            // Fixed-precision so stored timestamps sort lexicographically
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Which backend ended up holding a persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistTarget {
    /// The hosted record service
    Remote,
    /// The device-local fallback store
    Local,
}

/// Outcome of a persistence attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record was durably written to the given backend
    Persisted(PersistTarget),
    /// Both backends refused the record; it was logged and dropped
    Discarded,
}
