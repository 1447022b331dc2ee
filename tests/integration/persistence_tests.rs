/*!
 * Cross-instance persistence tests
 *
 * These tests exercise the durable cache through the full translator
 * lifecycle: a second translator constructed over the same cache base and
 * triple must serve previous results without touching the backend.
 */

use std::fs;
use std::sync::atomic::Ordering;

use automtl::cache::TranslationCache;
use automtl::providers::mock::MockProvider;
use automtl::Translator;

use crate::common::{create_temp_dir, test_config};

#[tokio::test]
async fn test_persistence_acrossInstances_shouldServeFromDisk() {
    let temp_dir = create_temp_dir().unwrap();
    let config = test_config(temp_dir.path());

    let first_result = {
        let mut translator =
            Translator::new(Box::new(MockProvider::working()), "en", "fr", &config);
        translator.translate("hello").await
    };
    assert!(first_result.is_some());

    let provider = MockProvider::working();
    let counter = provider.counter();
    let mut translator = Translator::new(Box::new(provider), "en", "fr", &config);

    let second_result = translator.translate("hello").await;
    assert_eq!(second_result, first_result);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_persistence_withNoTranslationMarker_shouldSurviveRestart() {
    let temp_dir = create_temp_dir().unwrap();
    let config = test_config(temp_dir.path());

    {
        let mut translator =
            Translator::new(Box::new(MockProvider::echoing()), "en", "fr", &config);
        assert_eq!(translator.translate("hello").await, None);
    }

    let provider = MockProvider::working();
    let counter = provider.counter();
    let mut translator = Translator::new(Box::new(provider), "en", "fr", &config);

    // The cached marker answers without a backend call, even though this
    // backend would now produce a translation
    assert_eq!(translator.translate("hello").await, None);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_persistence_artifact_shouldBeFlatJsonMapping() {
    let temp_dir = create_temp_dir().unwrap();
    let config = test_config(temp_dir.path());

    let mut translator = Translator::new(Box::new(MockProvider::echoing()), "en", "fr", &config);
    translator.translate("hello").await;

    let cache_file = TranslationCache::cache_file_path(temp_dir.path(), "mock", "en", "fr");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(cache_file).unwrap()).unwrap();

    assert!(json.is_object());
    assert!(json["hello"].is_null());
}

#[tokio::test]
async fn test_persistence_withCorruptArtifact_shouldStartCold() {
    let temp_dir = create_temp_dir().unwrap();
    let config = test_config(temp_dir.path());

    let cache_file = TranslationCache::cache_file_path(temp_dir.path(), "mock", "en", "fr");
    fs::create_dir_all(cache_file.parent().unwrap()).unwrap();
    fs::write(&cache_file, "][ not json").unwrap();

    let provider = MockProvider::working();
    let counter = provider.counter();
    let mut translator = Translator::new(Box::new(provider), "en", "fr", &config);

    // Construction succeeded with a cold cache; the miss goes to the backend
    assert!(translator.translate("hello").await.is_some());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_persistence_afterClear_shouldRemoveArtifactUntilNextWrite() {
    let temp_dir = create_temp_dir().unwrap();
    let config = test_config(temp_dir.path());

    let mut translator = Translator::new(Box::new(MockProvider::working()), "en", "fr", &config);
    translator.translate("hello").await;

    let cache_file = TranslationCache::cache_file_path(temp_dir.path(), "mock", "en", "fr");
    assert!(cache_file.exists());

    translator.clear_cache();
    assert!(!cache_file.exists());

    // The next successful write recreates the artifact
    translator.translate("goodbye").await;
    assert!(cache_file.exists());
}
