/*!
 * # dolmetscher
 *
 * A German–Korean phrase translator core: dictionary-first resolution with a
 * remote fallback, and remote-first history persistence with a durable local
 * fallback.
 *
 * ## Features
 *
 * - Curated bidirectional phrase dictionary (exact and partial matches)
 * - Remote translation endpoint consulted only on dictionary miss
 * - Translation history persisted to a hosted store, degrading to a local
 *   SQLite store on any failure (50 most-recent records retained)
 * - Stable pseudo-anonymous session identity per device
 * - Trait seams for OCR and speech-capture collaborators
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dictionary`: Ordered phrase tables and lookup
 * - `resolver`: Dictionary-first / remote-fallback resolution
 * - `providers`: Remote translation service clients
 * - `history`: Record model, local capped store, hosted store, fallback policy
 * - `storage`: Local SQLite persistence
 * - `session`: Device identity, language pair, in-flight guard
 * - `capture`: OCR / speech collaborator traits
 * - `notify`: User-facing notification categories
 * - `app_controller`: Orchestration of one user action
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod capture;
pub mod dictionary;
pub mod errors;
pub mod history;
pub mod language_utils;
pub mod notify;
pub mod providers;
pub mod resolver;
pub mod session;
pub mod storage;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, TranslateReport};
pub use dictionary::{NOT_FOUND_MESSAGE, PhraseDictionary};
pub use errors::{AppError, ProviderError, StoreError};
pub use history::{HistoryStore, PersistTarget, RecordOutcome, TranslationRecord};
pub use resolver::{TranslationOutcome, TranslationResolver};
pub use session::{LanguagePair, Session, SessionIdentity};
