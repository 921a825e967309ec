//! ASCII transliteration for name sanitization.
//!
//! A fixed substitution table handles the characters that decompose badly
//! (micro sign, mu, ash, ligatures); everything else goes through NFKD
//! decomposition and any remaining non-ASCII code point is dropped, so
//! diacritics vanish while their base letters survive.

use unicode_normalization::UnicodeNormalization;

/// Substitutions applied before decomposition, in order.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\u{00b5}", "u"),  // micro sign
    ("\u{03bc}", "u"),  // greek small letter mu
    ("&#181;", "u"),    // HTML entity for micro
    ("\u{00e6}", "ae"), // ash
    ("\u{00c6}", "AE"),
    ("\u{0153}", "oe"), // ligature oe
    ("\u{0152}", "OE"),
];

pub(crate) fn transliterate(value: &str) -> String {
    let mut s = value.to_string();
    for (from, to) in SUBSTITUTIONS {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }
    s.nfkd().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(transliterate("bi\u{e8}re"), "biere");
        assert_eq!(transliterate("\u{e9}tude"), "etude");
    }

    #[test]
    fn expands_ligatures() {
        assert_eq!(transliterate("encyclop\u{e6}dia"), "encyclopaedia");
        assert_eq!(transliterate("\u{152}uvre"), "OEuvre");
    }

    #[test]
    fn maps_micro_and_mu() {
        assert_eq!(transliterate("10\u{b5}M"), "10uM");
        assert_eq!(transliterate("10\u{3bc}M"), "10uM");
        assert_eq!(transliterate("10&#181;M"), "10uM");
    }

    #[test]
    fn drops_unmapped_non_ascii() {
        assert_eq!(transliterate("a\u{2603}b"), "ab");
        assert_eq!(transliterate("\u{2603}\u{2604}"), "");
    }
}
