use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::capture::{ImageTextExtractor, VoiceCapture};
use crate::dictionary::NOT_FOUND_MESSAGE;
use crate::history::{
    HistoryStore, LocalHistoryStore, RecordOutcome, RecordParams, RestRecordService,
    TranslationRecord,
};
use crate::language_utils;
use crate::notify::Notification;
use crate::providers::google::GoogleTranslateClient;
use crate::resolver::{TranslationOutcome, TranslationResolver};
use crate::session::{LanguagePair, Session};
use crate::storage::StorageConnection;

// @module: Application controller wiring session, resolver, and history

/// Everything the caller needs to render one translation action
#[derive(Debug, Clone)]
pub struct TranslateReport {
    /// Resolution result; absent when a capture precondition aborted the action
    pub outcome: Option<TranslationOutcome>,
    /// Where the record landed, when one was persisted
    pub record: Option<RecordOutcome>,
    /// User-facing notification for this action
    pub notification: Notification,
}

/// Main application controller for phrase translation
pub struct Controller {
    // @field: Session state (identity, direction, in-flight guard)
    session: Session,

    // @field: Dictionary-first resolver
    resolver: TranslationResolver,

    // @field: Remote-first history persistence
    history: HistoryStore,

    // @field: Optional OCR collaborator
    ocr: Option<Arc<dyn ImageTextExtractor>>,

    // @field: Optional speech-capture collaborator
    voice: Option<Arc<dyn VoiceCapture>>,

    // @field: How many records a history listing shows
    display_limit: usize,
}

impl Controller {
    /// Create a controller from already-built collaborators
    pub fn new(session: Session, resolver: TranslationResolver, history: HistoryStore) -> Self {
        Self {
            session,
            resolver,
            history,
            ocr: None,
            voice: None,
            display_limit: 10,
        }
    }

    /// Build a controller from configuration and a storage connection
    pub fn initialize(config: &Config, db: StorageConnection) -> Result<Self> {
        let session = Session::initialize(
            &db,
            LanguagePair::new(&config.source_language, &config.target_language),
        )?;

        let remote_translation =
            Arc::new(GoogleTranslateClient::with_endpoint(&config.translation.endpoint));
        let resolver = TranslationResolver::new(remote_translation)
            .with_remote_timeout(Duration::from_secs(config.translation.timeout_secs));

        let local = LocalHistoryStore::with_cap(db, config.history.local_cap);
        let history = if config.history.remote.is_enabled() {
            let remote = RestRecordService::new(
                &config.history.remote.url,
                &config.history.remote.api_key,
                &config.history.remote.table,
            )?;
            HistoryStore::new(Arc::new(remote), local)
        } else {
            info!("No hosted record store configured, history is local-only");
            HistoryStore::local_only(local)
        };

        Ok(Self {
            session,
            resolver,
            history,
            ocr: None,
            voice: None,
            display_limit: config.history.display_limit,
        })
    }

    /// Attach an OCR collaborator
    pub fn with_image_extractor(mut self, ocr: Arc<dyn ImageTextExtractor>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Attach a speech-capture collaborator
    pub fn with_voice_capture(mut self, voice: Arc<dyn VoiceCapture>) -> Self {
        self.voice = Some(voice);
        self
    }

    /// The session driving this controller
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Translate typed text.
    ///
    /// Returns `None` when another translation is already in flight; the
    /// request is ignored in that case.
    pub async fn translate_text(&self, text: &str) -> Option<TranslateReport> {
        if !self.session.begin_translation() {
            return None;
        }

        let report = self.resolve_and_record(text, None).await;
        self.session.end_translation();
        Some(report)
    }

    /// Translate text recognized from a captured image.
    ///
    /// The image payload is recorded alongside the translation. Extraction
    /// failures degrade to empty text, which aborts the action with a
    /// capture notification and writes no record.
    pub async fn translate_image(&self, image_data: &str) -> Option<TranslateReport> {
        if !self.session.begin_translation() {
            return None;
        }

        let report = self.image_action(image_data).await;
        self.session.end_translation();
        Some(report)
    }

    /// Translate a spoken phrase captured by the voice collaborator.
    pub async fn translate_voice(&self) -> Option<TranslateReport> {
        if !self.session.begin_translation() {
            return None;
        }

        let report = self.voice_action().await;
        self.session.end_translation();
        Some(report)
    }

    /// Swap the translation direction
    pub fn swap_languages(&self) -> (LanguagePair, Notification) {
        let pair = self.session.swap_languages();
        info!("Languages swapped, now {}", pair);
        (pair, Notification::languages_swapped())
    }

    /// List this user's translation history, most-recent first
    pub async fn history(&self, limit: Option<usize>) -> Vec<TranslationRecord> {
        let limit = limit.unwrap_or(self.display_limit);
        self.history.list(self.session.user_id(), limit).await
    }

    async fn image_action(&self, image_data: &str) -> TranslateReport {
        let Some(ocr) = &self.ocr else {
            return TranslateReport {
                outcome: None,
                record: None,
                notification: Notification::capture_failed("image capture is not available"),
            };
        };

        let languages = self.session.languages();
        let hint = language_utils::ocr_language_hint(&languages.from)
            .unwrap_or_else(|_| languages.from.clone());

        let text = match ocr.extract(image_data, &hint).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Text extraction failed: {}", e);
                String::new()
            }
        };

        if text.trim().is_empty() {
            return TranslateReport {
                outcome: None,
                record: None,
                notification: Notification::capture_failed("no text recognized"),
            };
        }

        self.resolve_and_record(&text, Some(image_data.to_string()))
            .await
    }

    async fn voice_action(&self) -> TranslateReport {
        let Some(voice) = &self.voice else {
            return TranslateReport {
                outcome: None,
                record: None,
                notification: Notification::capture_failed("voice capture is not available"),
            };
        };

        let languages = self.session.languages();
        let locale = language_utils::speech_locale_hint(&languages.from);

        let transcript = match voice.listen(&locale).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Voice capture failed: {}", e);
                return TranslateReport {
                    outcome: None,
                    record: None,
                    notification: Notification::capture_failed("speech was not recognized"),
                };
            }
        };

        if transcript.trim().is_empty() {
            return TranslateReport {
                outcome: None,
                record: None,
                notification: Notification::capture_failed("speech was not recognized"),
            };
        }

        self.resolve_and_record(&transcript, None).await
    }

    /// Resolve one input and persist the attempt.
    ///
    /// `Translated` and `NotFound` results are both recorded (the latter with
    /// the not-found sentinel); `Failed` writes nothing.
    async fn resolve_and_record(&self, text: &str, image_data: Option<String>) -> TranslateReport {
        let languages = self.session.languages();
        let outcome = self
            .resolver
            .resolve(text, &languages.from, &languages.to)
            .await;

        let (translated_text, notification) = match &outcome {
            TranslationOutcome::Translated(translation) => {
                (Some(translation.clone()), Notification::translated())
            }
            TranslationOutcome::NotFound => {
                (Some(NOT_FOUND_MESSAGE.to_string()), Notification::not_found())
            }
            TranslationOutcome::Failed(reason) => {
                error!("Translation failed: {}", reason);
                (None, Notification::internal_error())
            }
        };

        let record = match translated_text {
            Some(translated_text) => Some(
                self.history
                    .record(RecordParams {
                        user_id: self.session.user_id().to_string(),
                        original_text: text.trim().to_string(),
                        translated_text,
                        source_language: languages.from,
                        target_language: languages.to,
                        image_data,
                    })
                    .await,
            ),
            None => None,
        };

        TranslateReport {
            outcome: Some(outcome),
            record,
            notification,
        }
    }
}
