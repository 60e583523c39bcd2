/*!
 * Translation resolution.
 *
 * Two-tier strategy: the curated dictionary answers first, and only on a miss
 * is the remote endpoint consulted — once, without retry, behind a timeout.
 * Resolution is total: a miss is an outcome, never an error.
 */

use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::dictionary::PhraseDictionary;
use crate::language_utils;
use crate::providers::RemoteTranslationService;

/// Default ceiling on the remote translation call
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one resolution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// A translation was resolved
    Translated(String),
    /// Neither the dictionary nor the remote endpoint had an answer
    NotFound,
    /// Resolution could not run at all (blank input, bad language code)
    Failed(String),
}

impl TranslationOutcome {
    /// The resolved text, if any
    pub fn translation(&self) -> Option<&str> {
        match self {
            Self::Translated(text) => Some(text),
            _ => None,
        }
    }
}

/// Dictionary-first resolver with a remote fallback
pub struct TranslationResolver {
    /// Phrase dictionary, consulted first and authoritative on a hit
    dictionary: Arc<PhraseDictionary>,
    /// Remote fallback for dictionary misses
    remote: Arc<dyn RemoteTranslationService>,
    /// Ceiling on the remote call
    remote_timeout: Duration,
}

impl TranslationResolver {
    /// Create a resolver over the builtin dictionary
    pub fn new(remote: Arc<dyn RemoteTranslationService>) -> Self {
        Self::with_dictionary(Arc::new(PhraseDictionary::builtin().clone()), remote)
    }

    /// Create a resolver over a specific dictionary
    pub fn with_dictionary(
        dictionary: Arc<PhraseDictionary>,
        remote: Arc<dyn RemoteTranslationService>,
    ) -> Self {
        Self {
            dictionary,
            remote,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Override the remote-call timeout
    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    /// Resolve `text` in the `from` -> `to` direction.
    ///
    /// The dictionary is authoritative: on a hit the remote endpoint is never
    /// contacted. On a miss the remote endpoint is called exactly once; any
    /// failure there — transport error, empty body, timeout — degrades to
    /// `NotFound`. Only precondition violations produce `Failed`.
    pub async fn resolve(&self, text: &str, from: &str, to: &str) -> TranslationOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return TranslationOutcome::Failed("Input text is empty".to_string());
        }

        if let Err(e) = language_utils::validate_language_code(from) {
            return TranslationOutcome::Failed(e.to_string());
        }
        if let Err(e) = language_utils::validate_language_code(to) {
            return TranslationOutcome::Failed(e.to_string());
        }

        if let Some(translation) = self.dictionary.lookup(trimmed, from, to) {
            debug!("Dictionary hit for {} -> {}", from, to);
            return TranslationOutcome::Translated(translation.to_string());
        }

        debug!("Dictionary miss, consulting remote endpoint");

        match tokio::time::timeout(self.remote_timeout, self.remote.translate(trimmed, from, to))
            .await
        {
            Ok(Ok(translated)) if !translated.trim().is_empty() => {
                TranslationOutcome::Translated(translated)
            }
            Ok(Ok(_)) => {
                warn!("Remote translation returned empty text");
                TranslationOutcome::NotFound
            }
            Ok(Err(e)) => {
                warn!("Remote translation failed: {}", e);
                TranslationOutcome::NotFound
            }
            Err(_) => {
                warn!(
                    "Remote translation timed out after {:?}",
                    self.remote_timeout
                );
                TranslationOutcome::NotFound
            }
        }
    }
}
