/*!
 * Tests for session identity and session state
 */

use dolmetscher::session::{LanguagePair, Session, SessionIdentity};
use dolmetscher::storage::StorageConnection;

#[test]
fn test_getOrCreate_calledTwice_shouldReturnIdenticalString() {
    let store = StorageConnection::new_in_memory().unwrap();

    let first = SessionIdentity::get_or_create(&store).unwrap();
    let second = SessionIdentity::get_or_create(&store).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_getOrCreate_shouldUseTimestampAndSuffixFormat() {
    let store = StorageConnection::new_in_memory().unwrap();

    let user_id = SessionIdentity::get_or_create(&store).unwrap();
    let parts: Vec<&str> = user_id.splitn(3, '_').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "user");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 9);
}

#[test]
fn test_initialize_twiceOnSameStore_shouldShareIdentity() {
    let store = StorageConnection::new_in_memory().unwrap();

    let a = Session::initialize(&store, LanguagePair::new("ko", "de")).unwrap();
    let b = Session::initialize(&store, LanguagePair::new("ko", "de")).unwrap();

    assert_eq!(a.user_id(), b.user_id());
}

#[test]
fn test_swapLanguages_twice_shouldRestoreDirection() {
    let store = StorageConnection::new_in_memory().unwrap();
    let session = Session::initialize(&store, LanguagePair::new("ko", "de")).unwrap();

    session.swap_languages();
    session.swap_languages();

    assert_eq!(session.languages(), LanguagePair::new("ko", "de"));
}

#[test]
fn test_beginTranslation_concurrent_shouldAllowOnlyOne() {
    let store = StorageConnection::new_in_memory().unwrap();
    let session = Session::initialize(&store, LanguagePair::new("de", "ko")).unwrap();

    assert!(session.begin_translation());
    assert!(!session.begin_translation());
    assert!(!session.begin_translation());

    session.end_translation();
    assert!(session.begin_translation());
}
