/*!
 * # AutoMTL - Machine Translation Client
 *
 * A Rust library for translating short strings through pluggable
 * translation providers, with a persistent on-disk cache and inter-call
 * rate limiting to stay polite toward rate-limited services.
 *
 * ## Features
 *
 * - Translate strings through any backend implementing the
 *   `TranslationProvider` trait
 * - Persistent write-through JSON cache, one file per
 *   (provider, source language, target language) triple
 * - Configurable minimum spacing between outbound backend calls
 * - Echo detection: backends that return the input unchanged yield
 *   "no translation" instead of a bogus result
 * - Optional title-case normalization of translated output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `config`: Configuration management
 * - `cache`: Persistent translation cache
 * - `rate_limit`: Pacing between backend calls
 * - `normalize`: Post-processing of raw backend output
 * - `translator`: The translation orchestrator
 * - `providers`: Client implementations for translation backends:
 *   - `providers::google`: Google Translate web endpoint client
 *   - `providers::mock`: Mock provider for testing
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## Example
 *
 * ```no_run
 * use automtl::{Translator, TranslatorConfig};
 * use automtl::providers::google::GoogleTranslate;
 *
 * #[tokio::main]
 * async fn main() {
 *     let config = TranslatorConfig::default();
 *     let mut translator = Translator::new(
 *         Box::new(GoogleTranslate::new()),
 *         "en",
 *         "fr",
 *         &config,
 *     );
 *
 *     if let Some(translated) = translator.translate("hello world").await {
 *         println!("{}", translated);
 *     }
 * }
 * ```
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
pub mod cache;
pub mod config;
pub mod errors;
pub mod language_utils;
pub mod normalize;
pub mod providers;
pub mod rate_limit;
pub mod translator;

// Re-export main types for easier usage
pub use cache::TranslationCache;
pub use config::TranslatorConfig;
pub use errors::{CacheError, ProviderError};
pub use language_utils::{language_display_name, validate_language_code};
pub use providers::TranslationProvider;
pub use rate_limit::RateLimiter;
pub use translator::Translator;
