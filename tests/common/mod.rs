/*!
 * Common test utilities for the dolmetscher test suite
 */

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use dolmetscher::capture::{ImageTextExtractor, VoiceCapture};
use dolmetscher::errors::StoreError;
use dolmetscher::history::{RemoteRecordService, TranslationRecord};

/// In-memory stand-in for the hosted record service.
///
/// `working()` accepts inserts and answers queries from what it accepted;
/// `failing()` refuses every operation, driving the local fallback path.
pub struct MockRecordService {
    fail: bool,
    records: Mutex<Vec<TranslationRecord>>,
    insert_calls: AtomicUsize,
    query_calls: AtomicUsize,
}

impl MockRecordService {
    pub fn working() -> Self {
        Self {
            fail: false,
            records: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<TranslationRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteRecordService for MockRecordService {
    async fn insert(&self, record: &TranslationRecord) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(StoreError::RequestFailed(
                "mock record service configured to fail".to_string(),
            ));
        }

        // Newest first, matching the hosted store's read ordering
        self.records.lock().unwrap().insert(0, record.clone());
        Ok(())
    }

    async fn query(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<TranslationRecord>, StoreError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(StoreError::RequestFailed(
                "mock record service configured to fail".to_string(),
            ));
        }

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// OCR stub returning a fixed transcript (empty string simulates a failure)
pub struct StubImageTextExtractor {
    text: String,
    last_hint: Mutex<Option<String>>,
}

impl StubImageTextExtractor {
    pub fn recognizing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            last_hint: Mutex::new(None),
        }
    }

    pub fn blank() -> Self {
        Self::recognizing("")
    }

    pub fn last_hint(&self) -> Option<String> {
        self.last_hint.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageTextExtractor for StubImageTextExtractor {
    async fn extract(&self, _image_data: &str, language_hint: &str) -> anyhow::Result<String> {
        *self.last_hint.lock().unwrap() = Some(language_hint.to_string());
        Ok(self.text.clone())
    }
}

/// Voice stub returning a fixed transcript
pub struct StubVoiceCapture {
    transcript: String,
}

impl StubVoiceCapture {
    pub fn hearing(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait]
impl VoiceCapture for StubVoiceCapture {
    async fn listen(&self, _locale_hint: &str) -> anyhow::Result<String> {
        Ok(self.transcript.clone())
    }
}
