/*!
 * Post-processing of raw backend output.
 *
 * A backend that cannot translate a string often echoes it back instead
 * of failing. This module decides whether a raw result is meaningfully
 * different from the input and applies optional title casing.
 *
 * All functions here are pure, deterministic and idempotent.
 */

/// Normalize a raw backend result against the original input
///
/// Returns `None` when the backend produced no usable output: a missing
/// or blank result, or output equal to the input after trimming and
/// case-insensitive comparison (the backend echoed the input rather than
/// translating it, a no-op, not an error).
///
/// Otherwise returns the output, title-cased when `title_case` is set.
pub fn normalize(raw: Option<&str>, input: &str, title_case: bool) -> Option<String> {
    let raw = raw?;

    if raw.trim().is_empty() {
        return None;
    }

    if is_echo(raw, input) {
        return None;
    }

    if title_case {
        Some(to_title_case(raw))
    } else {
        Some(raw.to_string())
    }
}

/// Check whether the backend returned the input unchanged
fn is_echo(raw: &str, input: &str) -> bool {
    raw.trim().to_lowercase() == input.trim().to_lowercase()
}

/// Convert text to title case with a fixed, culture-neutral rule
///
/// The first letter of each whitespace-separated word is uppercased and
/// the remainder lowercased. Words without any lowercase letters are left
/// untouched so acronyms survive. Whitespace is preserved exactly.
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            push_cased_word(&mut result, &word);
            word.clear();
            result.push(ch);
        } else {
            word.push(ch);
        }
    }
    push_cased_word(&mut result, &word);

    result
}

/// Append a single word to `result` with title casing applied
fn push_cased_word(result: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }

    // Acronym rule: a word with no lowercase letters stays as-is
    if !word.chars().any(|c| c.is_lowercase()) {
        result.push_str(word);
        return;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(&chars.as_str().to_lowercase());
    }
}
