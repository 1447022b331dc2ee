/*!
 * Tests for language code utilities
 */

use automtl::{language_display_name, validate_language_code};

#[test]
fn test_validateLanguageCode_withIso6391Code_shouldSucceed() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("fr").is_ok());
    assert!(validate_language_code("ja").is_ok());
}

#[test]
fn test_validateLanguageCode_withIso6393Code_shouldSucceed() {
    assert!(validate_language_code("eng").is_ok());
    assert!(validate_language_code("fra").is_ok());
}

#[test]
fn test_validateLanguageCode_withWhitespaceAndCase_shouldNormalize() {
    assert!(validate_language_code(" EN ").is_ok());
}

#[test]
fn test_validateLanguageCode_withInvalidCode_shouldFail() {
    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("english").is_err());
}

#[test]
fn test_languageDisplayName_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(language_display_name("en").unwrap(), "English");
    assert_eq!(language_display_name("fr").unwrap(), "French");
    assert_eq!(language_display_name("deu").unwrap(), "German");
}

#[test]
fn test_languageDisplayName_withInvalidCode_shouldFail() {
    assert!(language_display_name("xx").is_err());
}
