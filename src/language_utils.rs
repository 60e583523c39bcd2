use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module validates the short codes used for translation directions and
/// derives the hints the capture collaborators expect: ISO 639-2/T codes for
/// optical text recognition and BCP-47-style locales for speech capture.

/// Validate that a code is a known ISO 639-1 (2-letter) language code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized = code.trim().to_lowercase();

    if normalized.len() == 2 && Language::from_639_1(&normalized).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Derive the ISO 639-2/T code an OCR engine expects (e.g. "de" -> "deu")
pub fn ocr_language_hint(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    Language::from_639_1(&normalized)
        .map(|lang| lang.to_639_3().to_string())
        .ok_or_else(|| anyhow!("No OCR language hint for code: {}", code))
}

/// Derive the locale tag a speech recognizer expects (e.g. "ko" -> "ko-KR")
pub fn speech_locale_hint(code: &str) -> String {
    let normalized = code.trim().to_lowercase();

    // Region mapping for the languages the original deployment supported
    match normalized.as_str() {
        "ko" => "ko-KR".to_string(),
        "de" => "de-DE".to_string(),
        "en" => "en-US".to_string(),
        "ja" => "ja-JP".to_string(),
        "zh" => "zh-CN".to_string(),
        other => format!("{}-{}", other, other.to_uppercase()),
    }
}

/// Get the English display name for a language code, if known
pub fn get_language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();
    Language::from_639_1(&normalized).map(|lang| lang.to_name().to_string())
}
