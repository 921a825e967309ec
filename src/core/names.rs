//! Make syntactically valid names out of arbitrary strings.
//!
//! The sanitizer replaces everything outside `[A-Za-z0-9]` with a single
//! underscore, collapses runs, trims the edges, and guards names that start
//! with a digit with an `X` prefix. Smart mode first rewrites semantically
//! meaningful symbols (`&`, `+`, `/`, `%`, hyphens, thousands separators)
//! into word tokens before they are lost to generic sanitization.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::transliterate::transliterate;

/// Ordered symbol rewrite rules for smart mode.
///
/// Order matters: the hyphen rules must run before generic symbol stripping
/// or the distinction between a separator hyphen ("a - b") and a word hyphen
/// ("-dox", "dox-") is lost.
static SMART_SYMBOL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"&", "_and_"),
        (r"\+", "_plus_"),
        (r"\s-\s", " "),
        (r"-\s", "_minus_"),
        (r"^-(.+)$", "minus_${1}"),
        (r"^(.+)-$", "${1}_minus"),
        (r"/", "_slash_"),
        (r"%", "_percent_"),
        (r"(\d),(\d)", "${1}${2}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid symbol rule"), replacement)
    })
    .collect()
});

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid pattern"));

static EDGE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_|_$").expect("valid pattern"));

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid pattern"));

/// Make syntactically valid names out of a batch of strings.
///
/// When `unique` is set, duplicate names receive numeric suffixes so every
/// output name is distinct within the batch. When `smart` is set, meaningful
/// symbols are rewritten into word tokens before sanitization.
///
/// Fails with [`Error::InvalidInput`] if any element is empty.
pub fn make_names<S: AsRef<str>>(strings: &[S], unique: bool, smart: bool) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(strings.len());
    for s in strings {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(Error::InvalidInput(
                "cannot make a name out of an empty string".to_string(),
            ));
        }
        let mut name = transliterate(s);
        if smart {
            // Apostrophes are deliberately NOT stripped here. They fall through
            // to the [^alnum] -> _ rule below, preserving word boundaries
            // (e.g. "5'3' bias" -> "5_3__bias" -> "X5_3_bias").
            for (rule, replacement) in SMART_SYMBOL_RULES.iter() {
                name = rule.replace_all(&name, *replacement).into_owned();
            }
        }
        name = NON_ALPHANUMERIC.replace_all(&name, "_").into_owned();
        name = EDGE_UNDERSCORE.replace_all(&name, "").into_owned();
        names.push(guard_prefix(&name));
    }
    if unique {
        names = make_unique(names);
    }
    Ok(names
        .into_iter()
        .map(|name| {
            let name = UNDERSCORE_RUN.replace_all(&name, "_").into_owned();
            EDGE_UNDERSCORE.replace_all(&name, "").into_owned()
        })
        .collect())
}

/// Guard names that would be invalid identifiers.
///
/// Emulates the legacy `make.names` rule with underscores allowed: a name
/// starting with a digit or a dot gets an `X` prefix, an empty name becomes
/// exactly `X`.
fn guard_prefix(name: &str) -> String {
    match name.chars().next() {
        None => "X".to_string(),
        Some(c) if c.is_ascii_digit() || c == '.' => format!("X{name}"),
        _ => name.to_string(),
    }
}

/// Append numeric suffixes to duplicate names.
///
/// The suffix is the smallest integer >= 1 whose suffixed form has not been
/// produced yet; generated variants count as seen, so later inputs that
/// happen to collide with a suffixed name are also disambiguated.
fn make_unique(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, u64> = HashMap::new();
    let mut result = Vec::with_capacity(names.len());
    for name in names {
        match seen.get(&name).copied() {
            Some(mut counter) => {
                let mut candidate = format!("{name}_{counter}");
                while seen.contains_key(&candidate) {
                    counter += 1;
                    candidate = format!("{name}_{counter}");
                }
                seen.insert(name, counter + 1);
                seen.insert(candidate.clone(), 1);
                result.push(candidate);
            }
            None => {
                seen.insert(name.clone(), 1);
                result.push(name);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sanitization() {
        assert_eq!(
            make_names(&["hello world", "foo bar"], true, false).unwrap(),
            vec!["hello_world", "foo_bar"]
        );
    }

    #[test]
    fn unique_suffixes() {
        assert_eq!(
            make_names(&["a", "a", "b"], true, false).unwrap(),
            vec!["a", "a_1", "b"]
        );
    }

    #[test]
    fn unique_suffix_avoids_existing_names() {
        assert_eq!(
            make_names(&["a", "a", "a_1"], true, false).unwrap(),
            vec!["a", "a_1", "a_1_1"]
        );
    }

    #[test]
    fn guard_prefix_for_leading_digit() {
        assert_eq!(
            make_names(&["1foo", "2bar"], true, false).unwrap(),
            vec!["X1foo", "X2bar"]
        );
    }

    #[test]
    fn smart_symbols() {
        assert_eq!(
            make_names(&["%GC", "a+b"], true, true).unwrap(),
            vec!["percent_GC", "a_plus_b"]
        );
        assert_eq!(
            make_names(&["%GC", "a+b"], true, false).unwrap(),
            vec!["GC", "a_b"]
        );
    }

    #[test]
    fn apostrophe_preserves_boundary() {
        assert_eq!(
            make_names(&["5'3' bias"], true, false).unwrap(),
            vec!["X5_3_bias"]
        );
    }

    #[test]
    fn thousands_separators_collapse() {
        assert_eq!(
            make_names(&["1,000,000"], true, true).unwrap(),
            vec!["X1000000"]
        );
    }

    #[test]
    fn empty_string_fails() {
        assert!(make_names(&[""], true, false).is_err());
        assert!(make_names(&["ok", ""], true, false).is_err());
    }

    #[test]
    fn decorative_only_input_becomes_guard() {
        assert_eq!(make_names(&["!!!"], true, false).unwrap(), vec!["X"]);
    }
}
