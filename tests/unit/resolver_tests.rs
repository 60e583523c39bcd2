/*!
 * Tests for the translation resolution strategy
 */

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use dolmetscher::providers::mock::MockTranslationService;
use dolmetscher::resolver::{TranslationOutcome, TranslationResolver};

#[tokio::test]
async fn test_resolve_withDictionaryHit_shouldNotCallRemote() {
    let remote = Arc::new(MockTranslationService::working());
    let counter = remote.call_counter();
    let resolver = TranslationResolver::new(remote);

    let outcome = resolver.resolve("Hallo", "de", "ko").await;

    assert_eq!(outcome, TranslationOutcome::Translated("안녕하세요".to_string()));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resolve_withDictionaryMiss_shouldCallRemoteOnce() {
    let remote = Arc::new(MockTranslationService::working());
    let counter = remote.call_counter();
    let resolver = TranslationResolver::new(remote);

    let outcome = resolver.resolve("Quantenmechanik ist spannend", "de", "ko").await;

    assert!(matches!(outcome, TranslationOutcome::Translated(_)));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_withFailingRemote_shouldReturnNotFoundNotError() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::failing()));

    let outcome = resolver.resolve("xyz-unknown-phrase", "de", "ko").await;

    assert_eq!(outcome, TranslationOutcome::NotFound);
}

#[tokio::test]
async fn test_resolve_withFailingRemote_shouldStillUseDictionary() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::failing()));

    let outcome = resolver.resolve("danke", "de", "ko").await;

    assert_eq!(outcome, TranslationOutcome::Translated("감사합니다".to_string()));
}

#[tokio::test]
async fn test_resolve_withEmptyRemoteResponse_shouldReturnNotFound() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::empty()));

    let outcome = resolver.resolve("unbekanntes wort", "de", "ko").await;

    assert_eq!(outcome, TranslationOutcome::NotFound);
}

#[tokio::test]
async fn test_resolve_withTimedOutRemote_shouldReturnNotFound() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::slow(500)))
        .with_remote_timeout(Duration::from_millis(10));

    let outcome = resolver.resolve("unbekanntes wort", "de", "ko").await;

    assert_eq!(outcome, TranslationOutcome::NotFound);
}

#[tokio::test]
async fn test_resolve_withBlankInput_shouldReturnFailed() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::working()));

    let outcome = resolver.resolve("", "de", "ko").await;

    assert!(matches!(outcome, TranslationOutcome::Failed(_)));
}

#[tokio::test]
async fn test_resolve_withInvalidLanguageCode_shouldReturnFailed() {
    let resolver = TranslationResolver::new(Arc::new(MockTranslationService::working()));

    let outcome = resolver.resolve("hallo", "de", "q7").await;

    assert!(matches!(outcome, TranslationOutcome::Failed(_)));
}

#[tokio::test]
async fn test_resolve_missOnUnsupportedDirection_shouldFallBackToRemote() {
    // "en" is a valid code with no dictionary table; the remote answers
    let remote = Arc::new(MockTranslationService::working());
    let counter = remote.call_counter();
    let resolver = TranslationResolver::new(remote);

    let outcome = resolver.resolve("hello", "en", "ko").await;

    assert_eq!(
        outcome,
        TranslationOutcome::Translated("[en->ko] hello".to_string())
    );
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
