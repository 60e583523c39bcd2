/*!
 * Tests for controller orchestration: busy guard, persistence policy,
 * and the capture paths
 */

use std::sync::Arc;

use dolmetscher::app_controller::Controller;
use dolmetscher::dictionary::NOT_FOUND_MESSAGE;
use dolmetscher::history::{HistoryStore, LocalHistoryStore, PersistTarget, RecordOutcome};
use dolmetscher::notify::Severity;
use dolmetscher::providers::RemoteTranslationService;
use dolmetscher::providers::mock::MockTranslationService;
use dolmetscher::resolver::{TranslationOutcome, TranslationResolver};
use dolmetscher::session::{LanguagePair, Session};
use dolmetscher::storage::StorageConnection;

use crate::common::{MockRecordService, StubImageTextExtractor, StubVoiceCapture};

fn build_controller(
    remote_translation: Arc<dyn RemoteTranslationService>,
    remote_records: Option<Arc<MockRecordService>>,
) -> Controller {
    let db = StorageConnection::new_in_memory().unwrap();
    let session = Session::initialize(&db, LanguagePair::new("de", "ko")).unwrap();
    let resolver = TranslationResolver::new(remote_translation);
    let local = LocalHistoryStore::new(db);

    let history = match remote_records {
        Some(remote) => HistoryStore::new(remote, local),
        None => HistoryStore::local_only(local),
    };

    Controller::new(session, resolver, history)
}

#[tokio::test]
async fn test_translateText_withDictionaryHit_shouldPersistAndNotify() {
    let controller = build_controller(Arc::new(MockTranslationService::failing()), None);

    let report = controller.translate_text("Hallo").await.unwrap();

    assert_eq!(
        report.outcome,
        Some(TranslationOutcome::Translated("안녕하세요".to_string()))
    );
    assert_eq!(
        report.record,
        Some(RecordOutcome::Persisted(PersistTarget::Local))
    );
    assert_eq!(report.notification.severity, Severity::Success);

    let records = controller.history(None).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original_text, "Hallo");
    assert_eq!(records[0].translated_text, "안녕하세요");
}

#[tokio::test]
async fn test_translateText_withNotFound_shouldPersistSentinel() {
    let controller = build_controller(Arc::new(MockTranslationService::failing()), None);

    let report = controller.translate_text("xyz-unknown-phrase").await.unwrap();

    assert_eq!(report.outcome, Some(TranslationOutcome::NotFound));
    assert_eq!(report.notification.severity, Severity::Error);

    let records = controller.history(None).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].translated_text, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_translateText_withFailedOutcome_shouldNotPersist() {
    let controller = build_controller(Arc::new(MockTranslationService::working()), None);

    let report = controller.translate_text("   ").await.unwrap();

    assert!(matches!(report.outcome, Some(TranslationOutcome::Failed(_))));
    assert!(report.record.is_none());
    assert!(controller.history(None).await.is_empty());
}

#[tokio::test]
async fn test_translateText_whileInFlight_shouldBeIgnored() {
    let controller = build_controller(Arc::new(MockTranslationService::working()), None);

    // Simulate an outstanding resolution
    assert!(controller.session().begin_translation());

    let report = controller.translate_text("Hallo").await;
    assert!(report.is_none());

    controller.session().end_translation();
    let report = controller.translate_text("Hallo").await;
    assert!(report.is_some());
}

#[tokio::test]
async fn test_translateText_withWorkingRemoteStore_shouldPersistRemotely() {
    let records = Arc::new(MockRecordService::working());
    let controller = build_controller(
        Arc::new(MockTranslationService::failing()),
        Some(Arc::clone(&records)),
    );

    let report = controller.translate_text("danke").await.unwrap();

    assert_eq!(
        report.record,
        Some(RecordOutcome::Persisted(PersistTarget::Remote))
    );
    assert_eq!(records.insert_calls(), 1);
}

#[tokio::test]
async fn test_translateImage_shouldRecordImagePayloadAndOcrHint() {
    let stub = Arc::new(StubImageTextExtractor::recognizing("Hallo"));
    let controller = build_controller(Arc::new(MockTranslationService::failing()), None)
        .with_image_extractor(stub.clone());

    let report = controller
        .translate_image("data:image/jpeg;base64,abc")
        .await
        .unwrap();

    assert_eq!(
        report.outcome,
        Some(TranslationOutcome::Translated("안녕하세요".to_string()))
    );
    // OCR hint derives from the source language (de -> deu)
    assert_eq!(stub.last_hint().as_deref(), Some("deu"));

    let records = controller.history(None).await;
    assert_eq!(
        records[0].image_data.as_deref(),
        Some("data:image/jpeg;base64,abc")
    );
}

#[tokio::test]
async fn test_translateImage_withNoRecognizedText_shouldAbortWithoutRecord() {
    let controller = build_controller(Arc::new(MockTranslationService::working()), None)
        .with_image_extractor(Arc::new(StubImageTextExtractor::blank()));

    let report = controller
        .translate_image("data:image/jpeg;base64,abc")
        .await
        .unwrap();

    assert!(report.outcome.is_none());
    assert!(report.record.is_none());
    assert_eq!(report.notification.severity, Severity::Error);
    assert!(controller.history(None).await.is_empty());
}

#[tokio::test]
async fn test_translateImage_withoutExtractor_shouldReportCaptureFailure() {
    let controller = build_controller(Arc::new(MockTranslationService::working()), None);

    let report = controller
        .translate_image("data:image/jpeg;base64,abc")
        .await
        .unwrap();

    assert!(report.outcome.is_none());
    assert_eq!(report.notification.severity, Severity::Error);
}

#[tokio::test]
async fn test_translateVoice_shouldResolveTranscriptWithoutImage() {
    let controller = build_controller(Arc::new(MockTranslationService::failing()), None)
        .with_voice_capture(Arc::new(StubVoiceCapture::hearing("danke")));

    let report = controller.translate_voice().await.unwrap();

    assert_eq!(
        report.outcome,
        Some(TranslationOutcome::Translated("감사합니다".to_string()))
    );

    let records = controller.history(None).await;
    assert_eq!(records.len(), 1);
    assert!(records[0].image_data.is_none());
}

#[tokio::test]
async fn test_swapLanguages_shouldReverseResolutionDirection() {
    let controller = build_controller(Arc::new(MockTranslationService::failing()), None);

    let (pair, notification) = controller.swap_languages();
    assert_eq!(pair, LanguagePair::new("ko", "de"));
    assert_eq!(notification.severity, Severity::Success);

    // Now resolving Korean input against the ko-de table
    let report = controller.translate_text("감사합니다").await.unwrap();
    assert_eq!(
        report.outcome,
        Some(TranslationOutcome::Translated("Danke".to_string()))
    );
}

#[tokio::test]
async fn test_history_shouldDefaultToDisplayLimit() {
    let controller = build_controller(Arc::new(MockTranslationService::working()), None);

    for i in 0..15 {
        controller
            .translate_text(&format!("satz nummer {}", i))
            .await
            .unwrap();
    }

    // Default display limit is 10
    let records = controller.history(None).await;
    assert_eq!(records.len(), 10);

    let all = controller.history(Some(50)).await;
    assert_eq!(all.len(), 15);
}
