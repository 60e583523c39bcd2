/*!
 * Session state: identity, language pair, and the in-flight guard.
 *
 * One `Session` is built per process. The identity is generated once per
 * device and persisted in the local database; the language pair is the only
 * mutable session state besides the guard.
 */

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use rand::{Rng, distr::Alphanumeric};
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::storage::StorageConnection;

/// Key under which the identity is persisted in the kv table
const USER_ID_KEY: &str = "user_id";

/// Length of the random identity suffix
const SUFFIX_LEN: usize = 9;

/// Ordered (from, to) language direction for the next resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Source language code
    pub from: String,
    /// Target language code
    pub to: String,
}

impl LanguagePair {
    /// Create a pair from two codes
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Swap direction in place
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Stable pseudo-anonymous device identity
pub struct SessionIdentity;

impl SessionIdentity {
    /// Return the persisted identity, generating and storing one on first use.
    ///
    /// Idempotent: every later call within the same storage lifetime returns
    /// the identical string.
    pub fn get_or_create(store: &StorageConnection) -> Result<String> {
        if let Some(existing) = store
            .kv_get(USER_ID_KEY)
            .context("Failed to read session identity")?
        {
            debug!("Using persisted session identity");
            return Ok(existing);
        }

        let user_id = Self::generate();
        store
            .kv_put(USER_ID_KEY, &user_id)
            .context("Failed to persist session identity")?;
        info!("Generated new session identity");

        Ok(user_id)
    }

    /// Build a fresh identity from the current time and a random suffix
    fn generate() -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect::<String>()
            .to_lowercase();

        format!("user_{}_{}", Utc::now().timestamp_millis(), suffix)
    }
}

/// Per-process session context: identity, direction, in-flight guard
pub struct Session {
    /// Stable device identity
    user_id: String,
    /// Current translation direction
    languages: Mutex<LanguagePair>,
    /// Set while a resolution is outstanding
    in_flight: AtomicBool,
}

impl Session {
    /// Build a session, loading or creating the device identity.
    pub fn initialize(store: &StorageConnection, languages: LanguagePair) -> Result<Self> {
        let user_id = SessionIdentity::get_or_create(store)?;

        Ok(Self {
            user_id,
            languages: Mutex::new(languages),
            in_flight: AtomicBool::new(false),
        })
    }

    /// The session's user id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Snapshot of the current language pair
    pub fn languages(&self) -> LanguagePair {
        self.languages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Swap the translation direction and return the new pair
    pub fn swap_languages(&self) -> LanguagePair {
        let mut pair = self
            .languages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pair.swap();
        pair.clone()
    }

    /// Try to mark a resolution as in flight.
    ///
    /// Returns false when another resolution is already outstanding; the
    /// caller must ignore the request in that case.
    pub fn begin_translation(&self) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!("Translation already in flight, request ignored");
            return false;
        }
        true
    }

    /// Clear the in-flight mark
    pub fn end_translation(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}
