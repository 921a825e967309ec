//! Turn identifiers back into human-readable words, labels, and titles.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::engine;
use crate::error::Result;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_.]+").expect("valid pattern"));

static SINGLE_CAPITAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z])\b").expect("valid pattern"));

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z0-9]+)\b").expect("valid pattern"));

static VERSUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(v|vs)\b").expect("valid pattern"));

/// Convert identifiers to human-readable word strings.
///
/// Strings that already contain whitespace pass through unmodified. All-caps
/// acronyms survive; capitalized words are lowercased; "v"/"vs" gain their
/// abbreviation period.
pub fn make_words<S: AsRef<str>>(strings: &[S]) -> Result<Vec<String>> {
    let mut result = Vec::with_capacity(strings.len());
    for s in strings {
        let s = s.as_ref();
        if s.chars().any(char::is_whitespace) {
            result.push(s.to_string());
            continue;
        }
        let processed = engine::syntactic(&[s], true, true)?.remove(0);
        let words = SEPARATOR_RUN.replace_all(&processed, " ").into_owned();
        let words = SINGLE_CAPITAL
            .replace_all(&words, |c: &Captures| c[1].to_lowercase())
            .into_owned();
        let words = CAPITALIZED_WORD
            .replace_all(&words, |c: &Captures| c[1].to_lowercase())
            .into_owned();
        let words = VERSUS.replace_all(&words, "${1}.").into_owned();
        result.push(words);
    }
    Ok(result)
}

/// Convert identifiers to title-cased strings: [`make_words`] followed by
/// [`sentence_case`].
pub fn make_title<S: AsRef<str>>(strings: &[S]) -> Result<Vec<String>> {
    Ok(sentence_case(&make_words(strings)?, false))
}

/// Convert identifiers to human-readable labels: [`make_words`] with the
/// first letter capitalized.
pub fn make_label<S: AsRef<str>>(strings: &[S]) -> Result<Vec<String>> {
    Ok(make_words(strings)?
        .iter()
        .map(|w| capitalize_first(w, false))
        .collect())
}

/// Capitalize the first letter of each string. When `strict`, the remaining
/// characters are lowercased.
pub fn capitalize<S: AsRef<str>>(strings: &[S], strict: bool) -> Vec<String> {
    strings
        .iter()
        .map(|s| capitalize_first(s.as_ref(), strict))
        .collect()
}

fn capitalize_first(s: &str, strict: bool) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let tail = chars.as_str();
            let tail = if strict {
                tail.to_lowercase()
            } else {
                tail.to_string()
            };
            first.to_uppercase().collect::<String>() + &tail
        }
    }
}

static ALL_CAPS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.A-Z0-9]+$").expect("valid pattern"));

static INNER_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.a-z0-9][A-Z]").expect("valid pattern"));

static DOUBLE_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}").expect("valid pattern"));

/// Convert strings to sentence case.
///
/// The first word gains a capital; later words keep their case when they look
/// like acronyms, otherwise they are lowercased. Strings without spaces pass
/// through unmodified. When `strict`, every word is forced to lowercase after
/// the initial capital.
pub fn sentence_case<S: AsRef<str>>(strings: &[S], strict: bool) -> Vec<String> {
    strings
        .iter()
        .map(|s| sentence_case_one(s.as_ref(), strict))
        .collect()
}

fn sentence_case_one(s: &str, strict: bool) -> String {
    if !s.contains(' ') {
        return s.to_string();
    }
    let mut words = s.split(' ');
    let first = words.next().unwrap_or_default();
    let mut parts = vec![capitalize_first(first, strict)];
    for word in words {
        let looks_like_acronym = ALL_CAPS_WORD.is_match(word)
            || INNER_UPPERCASE.is_match(word)
            || DOUBLE_UPPERCASE.is_match(word);
        if !strict && looks_like_acronym {
            parts.push(word.to_string());
        } else {
            parts.push(word.to_lowercase());
        }
    }
    parts.join(" ")
}
