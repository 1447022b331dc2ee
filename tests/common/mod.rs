/*!
 * Common test utilities for the automtl test suite
 */

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use automtl::TranslatorConfig;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a translator configuration rooted in the given cache directory
///
/// Pacing is disabled so tests that do not measure timing run instantly.
pub fn test_config<P: AsRef<Path>>(cache_dir: P) -> TranslatorConfig {
    TranslatorConfig {
        ms_between_calls: 0,
        title_case: true,
        cache_dir: cache_dir.as_ref().to_path_buf(),
    }
}
