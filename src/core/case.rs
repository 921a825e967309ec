//! Case renderers over the segmented name pipeline.
//!
//! All renderers share the same normalization front end ([`engine`]); they
//! differ only in how the underscore-segmented tokens are re-joined.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::engine;
use crate::error::{Error, Result};

/// Target case format for a conversion or rename batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Snake,
    Kebab,
    Dotted,
    Camel,
    Pascal,
}

impl CaseFormat {
    /// Parse a format name. Accepts the short names used by the CLI plus the
    /// long function-style aliases used by the rename surface.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "snake" | "snake_case" => Ok(CaseFormat::Snake),
            "kebab" | "kebab_case" => Ok(CaseFormat::Kebab),
            "dotted" | "dotted_case" => Ok(CaseFormat::Dotted),
            "camel" | "camel_case" => Ok(CaseFormat::Camel),
            "pascal" | "upper_camel" | "upper_camel_case" => Ok(CaseFormat::Pascal),
            _ => Err(Error::InvalidInput(format!(
                "Unknown case format '{}'. Use: snake, kebab, dotted, camel, pascal",
                s
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseFormat::Snake => "snake",
            CaseFormat::Kebab => "kebab",
            CaseFormat::Dotted => "dotted",
            CaseFormat::Camel => "camel",
            CaseFormat::Pascal => "pascal",
        }
    }
}

/// Options shared by every case renderer. All default to on, matching the
/// exported conversion functions.
#[derive(Debug, Clone, Copy)]
pub struct CaseOptions {
    /// Rewrite meaningful symbols and normalize acronyms before rendering.
    pub smart: bool,
    /// Keep the `X` guard in front of names that start with a digit.
    pub prefix: bool,
    /// Force full lowercasing before camel rendering (camel/Pascal only).
    pub strict: bool,
}

impl Default for CaseOptions {
    fn default() -> Self {
        Self {
            smart: true,
            prefix: true,
            strict: true,
        }
    }
}

/// Convert a batch of strings to the given case format.
pub fn convert<S: AsRef<str>>(
    strings: &[S],
    format: CaseFormat,
    options: &CaseOptions,
) -> Result<Vec<String>> {
    let names = engine::syntactic(strings, options.smart, options.prefix)?;
    Ok(match format {
        CaseFormat::Snake => names.into_iter().map(|s| s.to_lowercase()).collect(),
        CaseFormat::Kebab => names
            .into_iter()
            .map(|s| s.to_lowercase().replace('_', "-"))
            .collect(),
        CaseFormat::Dotted => names
            .into_iter()
            .map(|s| s.to_lowercase().replace('_', "."))
            .collect(),
        CaseFormat::Camel => names
            .into_iter()
            .map(|s| render_camel(&s, false, options.strict))
            .collect(),
        CaseFormat::Pascal => names
            .into_iter()
            .map(|s| render_camel(&s, true, options.strict))
            .collect(),
    })
}

/// Convert strings to snake_case.
pub fn snake_case<S: AsRef<str>>(strings: &[S], smart: bool, prefix: bool) -> Result<Vec<String>> {
    convert(strings, CaseFormat::Snake, &CaseOptions { smart, prefix, strict: true })
}

/// Convert strings to kebab-case.
pub fn kebab_case<S: AsRef<str>>(strings: &[S], smart: bool, prefix: bool) -> Result<Vec<String>> {
    convert(strings, CaseFormat::Kebab, &CaseOptions { smart, prefix, strict: true })
}

/// Convert strings to dotted.case.
pub fn dotted_case<S: AsRef<str>>(strings: &[S], smart: bool, prefix: bool) -> Result<Vec<String>> {
    convert(strings, CaseFormat::Dotted, &CaseOptions { smart, prefix, strict: true })
}

/// Convert strings to lowerCamelCase.
pub fn camel_case<S: AsRef<str>>(
    strings: &[S],
    strict: bool,
    smart: bool,
    prefix: bool,
) -> Result<Vec<String>> {
    convert(strings, CaseFormat::Camel, &CaseOptions { smart, prefix, strict })
}

/// Convert strings to UpperCamelCase (PascalCase).
pub fn upper_camel_case<S: AsRef<str>>(
    strings: &[S],
    strict: bool,
    smart: bool,
    prefix: bool,
) -> Result<Vec<String>> {
    convert(strings, CaseFormat::Pascal, &CaseOptions { smart, prefix, strict })
}

static FIRST_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\b").expect("valid pattern"));

static LEADING_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z])").expect("valid pattern"));

static LETTER_SEP_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])\.([0-9])").expect("valid pattern"));

static SEP_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([a-zA-Z])").expect("valid pattern"));

/// Render a segmented name as camelCase or PascalCase.
///
/// Separators between a letter and a digit collapse silently; a separator
/// that cannot become a case transition (two symbol-origin tokens in a row)
/// renders as a literal guard letter instead of being dropped, so tokens are
/// never ambiguously concatenated.
fn render_camel(name: &str, upper: bool, strict: bool) -> String {
    let mut s = name.replace('_', ".");
    if strict {
        s = s.to_lowercase();
    }
    s = if upper {
        LEADING_LOWERCASE
            .replace(&s, |c: &Captures| c[1].to_uppercase())
            .into_owned()
    } else {
        FIRST_WORD
            .replace(&s, |c: &Captures| c[1].to_lowercase())
            .into_owned()
    };
    s = LETTER_SEP_DIGIT.replace_all(&s, "${1}${2}").into_owned();
    s = SEP_LETTER
        .replace_all(&s, |c: &Captures| c[1].to_uppercase())
        .into_owned();
    if s.contains('.') {
        s = s.replace('.', if upper { "X" } else { "x" });
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNNAMED: &[&str] = &[
        "%GC",
        "10uM",
        "5'3' bias",
        "5prime",
        "G2M.Score",
        "hello world",
        "HELLO WORLD",
        "Mazda RX4",
        "nCount",
        "RNAi clones",
        "tx2gene",
        "TX2GeneID",
        "worfdbHTMLRemap",
        "x123",
    ];

    const PLUS_MINUS: &[&str] = &["100%", "+/-", "a +/- b", "dox-", "dox+", "-dox", "+dox", "/", "-"];

    #[test]
    fn snake_unnamed() {
        assert_eq!(
            snake_case(UNNAMED, true, true).unwrap(),
            vec![
                "percent_gc",
                "x10um",
                "x5_3_bias",
                "x5prime",
                "g2m_score",
                "hello_world",
                "hello_world",
                "mazda_rx4",
                "n_count",
                "rnai_clones",
                "tx2gene",
                "tx2_gene_id",
                "worfdb_html_remap",
                "x123",
            ]
        );
    }

    #[test]
    fn snake_acronyms() {
        assert_eq!(
            snake_case(&["cliUpdateRPackages", "externalIDs", "externalRNAs"], true, true).unwrap(),
            vec!["cli_update_r_packages", "external_ids", "external_rnas"]
        );
    }

    #[test]
    fn snake_plus_minus() {
        assert_eq!(
            snake_case(PLUS_MINUS, true, true).unwrap(),
            vec![
                "x100_percent",
                "plus_slash_minus",
                "a_plus_slash_minus_b",
                "dox_minus",
                "dox_plus",
                "minus_dox",
                "plus_dox",
                "slash",
                "x",
            ]
        );
    }

    #[test]
    fn kebab_unnamed() {
        assert_eq!(
            kebab_case(UNNAMED, true, true).unwrap(),
            vec![
                "percent-gc",
                "x10um",
                "x5-3-bias",
                "x5prime",
                "g2m-score",
                "hello-world",
                "hello-world",
                "mazda-rx4",
                "n-count",
                "rnai-clones",
                "tx2gene",
                "tx2-gene-id",
                "worfdb-html-remap",
                "x123",
            ]
        );
    }

    #[test]
    fn kebab_guard_prefix() {
        assert_eq!(kebab_case(&["1 foo bar"], true, true).unwrap(), vec!["x1-foo-bar"]);
        assert_eq!(kebab_case(&["1 foo bar"], true, false).unwrap(), vec!["1-foo-bar"]);
    }

    #[test]
    fn dotted_unnamed() {
        assert_eq!(
            dotted_case(UNNAMED, true, true).unwrap(),
            vec![
                "percent.gc",
                "x10um",
                "x5.3.bias",
                "x5prime",
                "g2m.score",
                "hello.world",
                "hello.world",
                "mazda.rx4",
                "n.count",
                "rnai.clones",
                "tx2gene",
                "tx2.gene.id",
                "worfdb.html.remap",
                "x123",
            ]
        );
    }

    #[test]
    fn dotted_smart_ampersand() {
        assert_eq!(dotted_case(&["here&there"], true, true).unwrap(), vec!["here.and.there"]);
        assert_eq!(dotted_case(&["here&there"], false, true).unwrap(), vec!["here.there"]);
    }

    #[test]
    fn dotted_accented_characters() {
        assert_eq!(
            dotted_case(
                &["bi\u{e8}re", "encyclop\u{e6}dia", "\u{e9}tude", "qu\u{e9} tal"],
                true,
                true
            )
            .unwrap(),
            vec!["biere", "encyclopaedia", "etude", "que.tal"]
        );
    }

    #[test]
    fn camel_strict_unnamed() {
        assert_eq!(
            camel_case(UNNAMED, true, true, true).unwrap(),
            vec![
                "percentGc",
                "x10um",
                "x5x3Bias",
                "x5prime",
                "g2mScore",
                "helloWorld",
                "helloWorld",
                "mazdaRx4",
                "nCount",
                "rnaiClones",
                "tx2gene",
                "tx2GeneId",
                "worfdbHtmlRemap",
                "x123",
            ]
        );
    }

    #[test]
    fn camel_non_strict_unnamed() {
        assert_eq!(
            camel_case(UNNAMED, false, true, true).unwrap(),
            vec![
                "percentGC",
                "x10um",
                "x5x3Bias",
                "x5prime",
                "g2mScore",
                "helloWorld",
                "helloWORLD",
                "mazdaRX4",
                "nCount",
                "rnaiClones",
                "tx2gene",
                "tx2GeneID",
                "worfdbHTMLRemap",
                "x123",
            ]
        );
    }

    #[test]
    fn camel_acronyms_strict() {
        assert_eq!(
            camel_case(&["cliUpdateRPackages", "externalIDs", "externalRNAs"], true, true, true)
                .unwrap(),
            vec!["cliUpdateRPackages", "externalIds", "externalRnas"]
        );
    }

    #[test]
    fn camel_delimited_numbers() {
        assert_eq!(
            camel_case(&["1,000,000", "0.01", "2018-01-01", "res.0.1"], true, true, true).unwrap(),
            vec!["x1000000", "x0x01", "x2018x01x01", "res0x1"]
        );
    }

    #[test]
    fn camel_plus_minus() {
        assert_eq!(
            camel_case(PLUS_MINUS, true, true, true).unwrap(),
            vec![
                "x100Percent",
                "plusSlashMinus",
                "aPlusSlashMinusB",
                "doxMinus",
                "doxPlus",
                "minusDox",
                "plusDox",
                "slash",
                "x",
            ]
        );
    }

    #[test]
    fn camel_guard_handling_without_prefix() {
        assert_eq!(camel_case(&["1 foo bar"], true, true, true).unwrap(), vec!["x1FooBar"]);
        assert_eq!(camel_case(&["1 foo bar"], true, true, false).unwrap(), vec!["1FooBar"]);
        assert_eq!(
            camel_case(
                &["Xenobiotic", "xenobiotic", "XX123", "X123", "xx123", "x123", "123"],
                true,
                true,
                false
            )
            .unwrap(),
            vec!["xenobiotic", "xenobiotic", "xx123", "123", "xx123", "123", "123"]
        );
    }

    #[test]
    fn pascal_strict_unnamed() {
        assert_eq!(
            upper_camel_case(UNNAMED, true, true, true).unwrap(),
            vec![
                "PercentGc",
                "X10um",
                "X5X3Bias",
                "X5prime",
                "G2mScore",
                "HelloWorld",
                "HelloWorld",
                "MazdaRx4",
                "NCount",
                "RnaiClones",
                "Tx2gene",
                "Tx2GeneId",
                "WorfdbHtmlRemap",
                "X123",
            ]
        );
    }

    #[test]
    fn pascal_non_strict_unnamed() {
        assert_eq!(
            upper_camel_case(UNNAMED, false, true, true).unwrap(),
            vec![
                "PercentGC",
                "X10um",
                "X5X3Bias",
                "X5prime",
                "G2MScore",
                "HelloWorld",
                "HELLOWORLD",
                "MazdaRX4",
                "NCount",
                "RNAIClones",
                "Tx2gene",
                "TX2GeneID",
                "WorfdbHTMLRemap",
                "X123",
            ]
        );
    }

    #[test]
    fn pascal_guard_prefix() {
        assert_eq!(upper_camel_case(&["1 foo bar"], true, true, true).unwrap(), vec!["X1FooBar"]);
        assert_eq!(upper_camel_case(&["1 foo bar"], true, true, false).unwrap(), vec!["1FooBar"]);
    }

    #[test]
    fn renderers_are_idempotent() {
        for input in UNNAMED {
            let once = snake_case(&[*input], true, true).unwrap();
            let twice = snake_case(&once, true, true).unwrap();
            assert_eq!(once, twice, "snake_case not idempotent for {input:?}");

            let once = kebab_case(&[*input], true, true).unwrap();
            let twice = kebab_case(&once, true, true).unwrap();
            assert_eq!(once, twice, "kebab_case not idempotent for {input:?}");

            let once = camel_case(&[*input], true, true, true).unwrap();
            let twice = camel_case(&once, true, true, true).unwrap();
            assert_eq!(once, twice, "camel_case not idempotent for {input:?}");
        }
    }

    #[test]
    fn parse_format_names() {
        assert_eq!(CaseFormat::parse("snake").unwrap(), CaseFormat::Snake);
        assert_eq!(CaseFormat::parse("snake_case").unwrap(), CaseFormat::Snake);
        assert_eq!(CaseFormat::parse("upper_camel_case").unwrap(), CaseFormat::Pascal);
        assert!(CaseFormat::parse("screaming").is_err());
    }
}
