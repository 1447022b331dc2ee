/*!
 * The translation orchestrator.
 *
 * Composes the cache, rate limiter, provider and normalizer into the
 * public `translate` entry point. Each translator instance is bound at
 * construction to one provider and one fixed language pair, and owns its
 * cache and rate limiter exclusively.
 */

use log::{debug, warn};

use crate::cache::TranslationCache;
use crate::config::TranslatorConfig;
use crate::normalize::normalize;
use crate::providers::TranslationProvider;
use crate::rate_limit::RateLimiter;

/// Translator for one provider and one fixed language pair
///
/// `translate` takes `&mut self`: a single logical caller per instance is
/// assumed. A host that needs concurrent access wraps the whole translator
/// in its own mutex, which serializes the lookup-call-store sequence.
pub struct Translator {
    /// The backend performing the actual translation calls
    provider: Box<dyn TranslationProvider>,

    /// Source language code
    source_language: String,

    /// Target language code
    target_language: String,

    /// Persistent write-through cache for this triple
    cache: TranslationCache,

    /// Pacing between backend calls
    rate_limiter: RateLimiter,

    /// Whether to title-case translated output
    title_case: bool,
}

impl Translator {
    /// Create a translator bound to a provider and language pair
    ///
    /// Loads the durable cache for the (provider, source, target) triple
    /// from the configured cache directory; a missing or corrupt cache
    /// file yields a cold cache, never a construction failure.
    pub fn new(
        provider: Box<dyn TranslationProvider>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        config: &TranslatorConfig,
    ) -> Self {
        let source_language = source_language.into();
        let target_language = target_language.into();

        let cache = TranslationCache::load(
            &config.cache_dir,
            provider.id(),
            &source_language,
            &target_language,
        );

        Self {
            provider,
            source_language,
            target_language,
            cache,
            rate_limiter: RateLimiter::new(config.ms_between_calls),
            title_case: config.title_case,
        }
    }

    /// Translate a single string
    ///
    /// Returns the translated text, or `None` when no meaningful
    /// translation exists: the backend failed, produced nothing, or
    /// echoed the input unchanged.
    ///
    /// A cache hit (including a cached `None`) returns immediately
    /// without pacing, backend call or re-persist. On a miss the result,
    /// whatever it is, is cached so a known-bad input is never retried.
    pub async fn translate(&mut self, input: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(input) {
            debug!(
                "Cache hit for {:?} ({} -> {})",
                input, self.source_language, self.target_language
            );
            return cached.map(|text| text.to_string());
        }

        self.rate_limiter.pace().await;
        let raw = self
            .provider
            .translate_raw(input, &self.source_language, &self.target_language)
            .await;
        self.rate_limiter.mark();

        let raw = match raw {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(
                    "{} failed to translate {:?} ({} -> {}): {}",
                    self.provider.id(),
                    input,
                    self.source_language,
                    self.target_language,
                    err
                );
                None
            }
        };

        let result = normalize(raw.as_deref(), input, self.title_case);
        self.cache.put(input, result.clone());

        result
    }

    /// Empty the cache, in memory and on disk
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Identifier of the provider this translator is bound to
    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Source language code
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Target language code
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// The cache owned by this translator
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
