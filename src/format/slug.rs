//! Locale-aware slug generation
//!
//! Turns human text into a lowercase, hyphen-separated ASCII token:
//! 1. Substitute characters using the locale's resolved rules
//! 2. Lowercase
//! 3. Collapse runs of anything outside `[a-z0-9]` into a single `-`
//! 4. Trim leading and trailing `-`
//!
//! Characters the rules don't cover are dropped, never replaced by a placeholder.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::resolve_rules;
use super::TextFormatter;

/// Separator placed between slug words
pub const SEPARATOR: char = '-';

/// Runs of non-alphanumerics (and of the separator itself)
static SEPARATOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^a-z0-9]|-)+").unwrap());

/// Formats values into URL-safe slugs for a fixed locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugFormatter {
    locale: String,
}

impl SlugFormatter {
    /// Create a formatter for `locale` (e.g. `de`, `de_AT`)
    ///
    /// Any string is accepted; unknown locales use the default rules only.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl TextFormatter for SlugFormatter {
    fn format(&self, value: &str) -> String {
        let rules = resolve_rules(&self.locale);

        let substituted = rules.apply(value);
        let lowered = substituted.to_lowercase();
        let collapsed = SEPARATOR_RUN_RE.replace_all(&lowered, "-");

        collapsed.trim_matches(SEPARATOR).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(locale: &str, value: &str) -> String {
        SlugFormatter::new(locale).format(value)
    }

    fn is_valid_slug(s: &str) -> bool {
        s.is_empty()
            || s.split(SEPARATOR).all(|word| {
                !word.is_empty()
                    && word
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
    }

    #[test]
    fn test_regex_compiles() {
        assert!(SEPARATOR_RUN_RE.is_match("--"));
        assert!(!SEPARATOR_RUN_RE.is_match("abc123"));
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(slug("de_DE", "foo  bar"), "foo-bar");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slug("de_DE", " -foo"), "foo");
        assert_eq!(slug("de_DE", "foo!?"), "foo");
    }

    #[test]
    fn test_german_umlauts() {
        assert_eq!(slug("de_DE", "Ä ä Ö ö Ü ü ß"), "ae-ae-oe-oe-ue-ue-ss");
    }

    #[test]
    fn test_austrian_sharp_s() {
        assert_eq!(slug("de_AT", "Ä ä Ö ö Ü ü ß"), "ae-ae-oe-oe-ue-ue-sz");
    }

    #[test]
    fn test_case_specific_mapping_before_lowercase() {
        assert_eq!(slug("en", "Å"), "aa");
        assert_eq!(slug("en", "Ð"), "dj");
    }

    #[test]
    fn test_unmapped_character_dropped() {
        assert_eq!(slug("de_DE", "Ą"), "");
        assert_eq!(slug("de_DE", "aĄb"), "a-b");
    }

    #[test]
    fn test_polish_mapping() {
        assert_eq!(slug("pl_PL", "Ą"), "a");
        assert_eq!(slug("pl_PL", "Łódź"), "lodz");
    }

    #[test]
    fn test_malformed_locale_uses_default() {
        assert_eq!(slug("", "Crème brûlée"), "creme-brulee");
        assert_eq!(slug("x", "Ä @ b"), "at-b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slug("de_DE", ""), "");
    }

    #[test]
    fn test_locale_accessor() {
        assert_eq!(SlugFormatter::new("de_AT").locale(), "de_AT");
    }

    #[test]
    fn test_output_charset() {
        let inputs = [
            "Hello, World!",
            "--a--b--",
            "日本語 text",
            "İstanbul'da ŞİŞLİ",
            "©2024 ACME® Inc.",
            "\t\n\r",
        ];
        for locale in ["de_DE", "tr_TR", "sv_SE", "pl", "en_US"] {
            for input in inputs {
                let out = slug(locale, input);
                assert!(is_valid_slug(&out), "{locale}: {input:?} -> {out:?}");
            }
        }
    }
}
