/*!
 * Capture collaborator seams.
 *
 * Optical text recognition and speech capture live outside this crate; the
 * controller consumes them through these traits. Both produce raw text that
 * feeds straight into resolution.
 */

use async_trait::async_trait;

/// Optical text recognition over an encoded image payload
///
/// `language_hint` is an ISO 639-2/T code (see
/// [`crate::language_utils::ocr_language_hint`]). An extraction failure is
/// reported as an error; the controller degrades it to empty text.
#[async_trait]
pub trait ImageTextExtractor: Send + Sync {
    /// Extract raw text from the image payload
    async fn extract(&self, image_data: &str, language_hint: &str) -> anyhow::Result<String>;
}

/// Speech-to-text capture
///
/// `locale_hint` is a locale tag like "de-DE" (see
/// [`crate::language_utils::speech_locale_hint`]).
#[async_trait]
pub trait VoiceCapture: Send + Sync {
    /// Listen once and return the recognized transcript
    async fn listen(&self, locale_hint: &str) -> anyhow::Result<String>;
}
