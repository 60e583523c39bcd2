/*!
 * Remote translation service implementations.
 *
 * This module contains the seam the resolver falls back to on a dictionary
 * miss, plus the concrete clients:
 * - Google: public translate endpoint (gtx client)
 * - Mock: configurable stand-in for tests
 */

use async_trait::async_trait;

use crate::errors::ProviderError;

/// Common trait for remote translation services
///
/// A best-effort text translation call. Implementations may fail for
/// rate-limiting, network, or malformed-response reasons and must not retry
/// internally; the resolver treats any failure as a miss.
#[async_trait]
pub trait RemoteTranslationService: Send + Sync {
    /// Translate `text` from `from` to `to`
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
