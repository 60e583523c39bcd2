/*!
 * Mock translation service for testing.
 *
 * Simulates different remote behaviors:
 * - `MockTranslationService::working()` - Always succeeds with translated text
 * - `MockTranslationService::failing()` - Always fails with an error
 * - `MockTranslationService::empty()` - Succeeds but returns empty text
 * - `MockTranslationService::slow(ms)` - Delays before answering (timeout testing)
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::RemoteTranslationService;

/// Behavior mode for the mock service
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a marked-up translation
    Working,
    /// Always fails with an error
    Failing,
    /// Succeeds but returns an empty string
    Empty,
    /// Delays before answering (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock remote translation service for testing resolver behavior
#[derive(Debug)]
pub struct MockTranslationService {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    call_count: Arc<AtomicUsize>,
}

impl MockTranslationService {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that sleeps before answering
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Handle to the call counter, for asserting whether the remote was hit
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    /// Number of translate calls received so far
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteTranslationService for MockTranslationService {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(format!("[{}->{}] {}", from, to, text)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock service configured to fail".to_string(),
            )),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[{}->{}] {}", from, to, text))
            }
        }
    }
}
