//! Zero-padding for consistent lexicographic sorting.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)$").expect("valid pattern"));

static LEFT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(.+)$").expect("valid pattern"));

static RIGHT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*[^0-9]+)([0-9]+)$").expect("valid pattern"));

/// Pad numbers with leading zeros so lexicographic order matches numeric order.
///
/// The batch must be uniformly plain integers, integer-prefixed, or
/// integer-suffixed. A batch where only some elements carry a number fails
/// with [`Error::InvalidInput`]; a batch with no numbers at all passes
/// through unchanged.
pub fn autopad_zeros<S: AsRef<str>>(values: &[S]) -> Result<Vec<String>> {
    let x: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    if x.is_empty() {
        return Ok(Vec::new());
    }

    if x.iter().all(|s| INTEGER.is_match(s)) {
        let width = x.iter().map(|s| s.len()).max().unwrap_or(0);
        return Ok(x.iter().map(|s| pad_number(s, width)).collect());
    }

    if let Some(parts) = split_all(&x, &LEFT_NUMBER) {
        let width = parts.iter().map(|(num, _)| num.len()).max().unwrap_or(0);
        return Ok(parts
            .iter()
            .map(|(num, stem)| format!("{}{}", pad_number(num, width), stem))
            .collect());
    }

    if let Some(parts) = split_all(&x, &RIGHT_NUMBER) {
        let width = parts.iter().map(|(_, num)| num.len()).max().unwrap_or(0);
        return Ok(parts
            .iter()
            .map(|(stem, num)| format!("{}{}", stem, pad_number(num, width)))
            .collect());
    }

    let any_match = x
        .iter()
        .any(|s| INTEGER.is_match(s) || LEFT_NUMBER.is_match(s) || RIGHT_NUMBER.is_match(s));
    if any_match {
        return Err(Error::InvalidInput(
            "partial padding match: some values carry a number, others do not".to_string(),
        ));
    }
    Ok(x.iter().map(|s| s.to_string()).collect())
}

fn pad_number(num: &str, width: usize) -> String {
    format!("{num:0>width$}")
}

/// Split every value with `pattern`, or return `None` if any value fails to
/// match.
fn split_all(x: &[&str], pattern: &Regex) -> Option<Vec<(String, String)>> {
    x.iter()
        .map(|s| {
            pattern
                .captures(s)
                .map(|c| (c[1].to_string(), c[2].to_string()))
        })
        .collect()
}
