/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for translation backends:
 * - Google: Google Translate web endpoint
 * - Mock: configurable test double
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the translator.
/// Implementations report failures as `ProviderError`; they never panic
/// into the orchestrator, which maps any error to the "no translation"
/// result.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Stable provider identifier, used in cache file names
    fn id(&self) -> &str;

    /// Human-readable provider name
    fn display_name(&self) -> &str;

    /// Supported language codes mapped to display names
    ///
    /// Metadata for the host application; the core never consults it.
    fn supported_languages(&self) -> HashMap<String, String>;

    /// Translate a single string between the given languages
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - Source language code
    /// * `target_language` - Target language code
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw translated text or an error
    async fn translate_raw(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
