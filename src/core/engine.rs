//! The shared name-processing pipeline behind every case renderer.
//!
//! Two ordered regex cascades run after [`make_names`]: acronym sanitization
//! (smart mode) and word-boundary segmentation. Each cascade is an explicit
//! rule list applied in a fixed order; the rules are not commutative and a
//! later rule may fire on a boundary an earlier rule introduced.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::names::make_names;

// ============================================================================
// Acronym sanitization (smart mode)
// ============================================================================

static ID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(id)\b").expect("valid pattern"));

static MOLARITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([mnu]M)\b").expect("valid pattern"));

static DIGIT_MOLARITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+[mnu]M)\b").expect("valid pattern"));

static PLURAL_ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z0-9]+)s\b").expect("valid pattern"));

static RNA_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:mi|nc|pi|r)RNA)\b").expect("valid pattern"));

static RNA_INTERFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(RNAi)\b").expect("valid pattern"));

static ETHANOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(EtOH)\b").expect("valid pattern"));

/// Normalize mixed-case acronyms so case rendering does not mangle them.
///
/// Operates on a dot-redelimited copy of the name so the `\b` word-boundary
/// assertions line up with token edges, then restores underscores.
fn sanitize_acronyms(name: &str) -> String {
    let mut s = name.replace('_', ".");
    // Identifier variants (e.g. "Id" to "ID").
    s = ID_TOKEN.replace_all(&s, "ID").into_owned();
    // Molarity (e.g. "nM" to "nm"), with and without digit prefixes.
    s = MOLARITY
        .replace_all(&s, |c: &Captures| c[1].to_lowercase())
        .into_owned();
    s = DIGIT_MOLARITY
        .replace_all(&s, |c: &Captures| c[1].to_lowercase())
        .into_owned();
    // Pluralized acronyms (e.g. "UMIs" to "UMIS").
    s = PLURAL_ACRONYM.replace_all(&s, "${1}S").into_owned();
    // Mixed case RNA types.
    s = RNA_TYPE
        .replace_all(&s, |c: &Captures| c[1].to_uppercase())
        .into_owned();
    s = RNA_INTERFERENCE.replace_all(&s, "RNAI").into_owned();
    s = ETHANOL.replace_all(&s, "Etoh").into_owned();
    s.replace('.', "_")
}

// ============================================================================
// Word-boundary segmentation
// ============================================================================

static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid pattern"));

static ACRONYM_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9])([A-Z])([a-z]{2,})").expect("valid pattern"));

static ACRONYM_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9]{2,})([A-Z])([a-z]).+").expect("valid pattern"));

/// Insert underscore boundaries at case shifts.
///
/// A priority cascade, not independent rules:
/// 1. lowercase-then-uppercase (`fooBar` -> `foo_Bar`)
/// 2. acronym run followed by a capitalized word (`HTMLRemap` -> `HTML_Remap`)
/// 3. remaining long acronym runs with a degenerate tail, which is dropped
fn segment_word_boundaries(name: &str) -> String {
    let s = LOWER_THEN_UPPER.replace_all(name, "${1}_${2}").into_owned();
    let s = ACRONYM_THEN_WORD
        .replace_all(&s, "${1}_${2}${3}")
        .into_owned();
    ACRONYM_TAIL.replace_all(&s, "${1}_${2}${3}").into_owned()
}

static GUARD_BEFORE_NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^X([^a-zA-Z])").expect("valid pattern"));

/// Run the full normalization pipeline, producing underscore-segmented names
/// ready for a case renderer.
pub(crate) fn syntactic<S: AsRef<str>>(
    strings: &[S],
    smart: bool,
    prefix: bool,
) -> Result<Vec<String>> {
    let mut names = make_names(strings, false, smart)?;
    if smart {
        names = names
            .into_iter()
            .map(|name| sanitize_acronyms(&name.replace('\'', "")))
            .collect();
    }
    if !prefix {
        // Drop the guard only when it sits in front of a non-letter; a real
        // leading "X" (e.g. "Xenobiotic") stays put.
        names = names
            .into_iter()
            .map(|name| GUARD_BEFORE_NON_LETTER.replace(&name, "${1}").into_owned())
            .collect();
    }
    Ok(names
        .into_iter()
        .map(|name| segment_word_boundaries(&name))
        .collect())
}
