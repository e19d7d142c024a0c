//! Locale-keyed character substitution rules for slug generation
//!
//! Rules are organised in layers:
//! - `default`: always applied first
//! - language (`de`, `pl`, ...): looked up by the first two characters of the locale
//! - region (`de_AT`, ...): looked up by the full locale string
//!
//! Later layers override earlier ones on key collision. The table is built
//! once on first access and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Tag of the layer that is always applied
pub const DEFAULT_LAYER: &str = "default";

/// A single layer of substitutions
type RuleLayer = &'static [(char, &'static str)];

const DEFAULT_RULES: RuleLayer = &[
    ('°', "o"),
    ('¹', "1"),
    ('²', "2"),
    ('³', "3"),
    ('⁴', "4"),
    ('⁵', "5"),
    ('⁶', "6"),
    ('⁷', "7"),
    ('⁸', "8"),
    ('⁹', "9"),
    ('₀', "0"),
    ('₁', "1"),
    ('₂', "2"),
    ('₃', "3"),
    ('₄', "4"),
    ('₅', "5"),
    ('₆', "6"),
    ('₇', "7"),
    ('₈', "8"),
    ('₉', "9"),
    ('æ', "ae"),
    ('ǽ', "ae"),
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Å', "AA"),
    ('Ǻ', "A"),
    ('Ă', "A"),
    ('Ǎ', "A"),
    ('Æ', "AE"),
    ('Ǽ', "AE"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('å', "aa"),
    ('ǻ', "a"),
    ('ă', "a"),
    ('ǎ', "a"),
    ('ª', "a"),
    ('@', "at"),
    ('Ĉ', "C"),
    ('Ċ', "C"),
    ('ĉ', "c"),
    ('ċ', "c"),
    ('©', "c"),
    ('Ð', "Dj"),
    ('Đ', "D"),
    ('ð', "dj"),
    ('đ', "d"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ĕ', "E"),
    ('Ė', "E"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ĕ', "e"),
    ('ė', "e"),
    ('ƒ', "f"),
    ('Ĝ', "G"),
    ('Ġ', "G"),
    ('ĝ', "g"),
    ('ġ', "g"),
    ('Ĥ', "H"),
    ('Ħ', "H"),
    ('ĥ', "h"),
    ('ħ', "h"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ĩ', "I"),
    ('Ĭ', "I"),
    ('Ǐ', "I"),
    ('Į', "I"),
    ('Ĳ', "IJ"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ĩ', "i"),
    ('ĭ', "i"),
    ('ǐ', "i"),
    ('į', "i"),
    ('ĳ', "ij"),
    ('Ĵ', "J"),
    ('ĵ', "j"),
    ('Ĺ', "L"),
    ('Ľ', "L"),
    ('Ŀ', "L"),
    ('ĺ', "l"),
    ('ľ', "l"),
    ('ŀ', "l"),
    ('Ñ', "N"),
    ('ñ', "n"),
    ('ŉ', "n"),
    ('Ò', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ō', "O"),
    ('Ŏ', "O"),
    ('Ǒ', "O"),
    ('Ő', "O"),
    ('Ơ', "O"),
    ('Ø', "OE"),
    ('Ǿ', "O"),
    ('Œ', "OE"),
    ('ò', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ō', "o"),
    ('ŏ', "o"),
    ('ǒ', "o"),
    ('ő', "o"),
    ('ơ', "o"),
    ('ø', "oe"),
    ('ǿ', "o"),
    ('º', "o"),
    ('œ', "oe"),
    ('Ŕ', "R"),
    ('Ŗ', "R"),
    ('ŕ', "r"),
    ('ŗ', "r"),
    ('Ŝ', "S"),
    ('Ș', "S"),
    ('ŝ', "s"),
    ('ș', "s"),
    ('ſ', "s"),
    ('Ţ', "T"),
    ('Ț', "T"),
    ('Ŧ', "T"),
    ('Þ', "TH"),
    ('ţ', "t"),
    ('ț', "t"),
    ('ŧ', "t"),
    ('þ', "th"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ũ', "U"),
    ('Ŭ', "U"),
    ('Ű', "U"),
    ('Ų', "U"),
    ('Ư', "U"),
    ('Ǔ', "U"),
    ('Ǖ', "U"),
    ('Ǘ', "U"),
    ('Ǚ', "U"),
    ('Ǜ', "U"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ũ', "u"),
    ('ŭ', "u"),
    ('ű', "u"),
    ('ų', "u"),
    ('ư', "u"),
    ('ǔ', "u"),
    ('ǖ', "u"),
    ('ǘ', "u"),
    ('ǚ', "u"),
    ('ǜ', "u"),
    ('Ŵ', "W"),
    ('ŵ', "w"),
    ('Ý', "Y"),
    ('Ÿ', "Y"),
    ('Ŷ', "Y"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('ŷ', "y"),
];

// German
const DE_RULES: RuleLayer = &[
    ('Ä', "AE"),
    ('Ö', "OE"),
    ('Ü', "UE"),
    ('ß', "ss"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
];

// German (Austria)
const DE_AT_RULES: RuleLayer = &[
    ('Ä', "AE"),
    ('Ö', "OE"),
    ('Ü', "UE"),
    ('ß', "sz"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
];

// Polish
const PL_RULES: RuleLayer = &[
    ('Ą', "A"),
    ('Ć', "C"),
    ('Ę', "E"),
    ('Ł', "L"),
    ('Ń', "N"),
    ('Ó', "O"),
    ('Ś', "S"),
    ('Ź', "Z"),
    ('Ż', "Z"),
    ('ą', "a"),
    ('ć', "c"),
    ('ę', "e"),
    ('ł', "l"),
    ('ń', "n"),
    ('ó', "o"),
    ('ś', "s"),
    ('ź', "z"),
    ('ż', "z"),
];

// Swedish. Lowercase `ö` maps to itself and is therefore dropped from slugs.
const SV_RULES: RuleLayer = &[('Ä', "A"), ('Ö', "O"), ('ä', "a"), ('ö', "ö")];

// Turkish
const TR_RULES: RuleLayer = &[
    ('Ç', "C"),
    ('Ğ', "G"),
    ('İ', "I"),
    ('Ş', "S"),
    ('Ö', "O"),
    ('Ü', "U"),
    ('ç', "c"),
    ('ğ', "g"),
    ('ı', "i"),
    ('ş', "s"),
    ('ö', "o"),
    ('ü', "u"),
];

/// All registered layers, keyed by locale tag
static RULE_TABLE: LazyLock<HashMap<&'static str, RuleLayer>> = LazyLock::new(|| {
    HashMap::from([
        (DEFAULT_LAYER, DEFAULT_RULES),
        ("de", DE_RULES),
        ("de_AT", DE_AT_RULES),
        ("pl", PL_RULES),
        ("sv", SV_RULES),
        ("tr", TR_RULES),
    ])
});

/// Effective substitution map for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRules {
    map: HashMap<char, &'static str>,
}

impl ResolvedRules {
    fn extend(&mut self, layer: RuleLayer) {
        self.map.extend(layer.iter().copied());
    }

    /// Replacement for `c`, if any layer maps it
    #[must_use]
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Replace every mapped character of `value`; unmapped characters pass through
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        let mut result = String::with_capacity(value.len());
        for c in value.chars() {
            match self.get(c) {
                Some(replacement) => result.push_str(replacement),
                None => result.push(c),
            }
        }
        result
    }
}

/// Language part of a locale: its first two characters (or less, for short tags)
#[must_use]
pub fn language_of(locale: &str) -> &str {
    match locale.char_indices().nth(2) {
        Some((idx, _)) => &locale[..idx],
        None => locale,
    }
}

/// Merge the `default`, language and region layers for `locale`
///
/// Unknown or malformed locales resolve to the default layer alone.
#[must_use]
pub fn resolve_rules(locale: &str) -> ResolvedRules {
    let mut rules = ResolvedRules {
        map: HashMap::with_capacity(DEFAULT_RULES.len() + 32),
    };

    if let Some(&layer) = RULE_TABLE.get(DEFAULT_LAYER) {
        rules.extend(layer);
    }
    if let Some(&layer) = RULE_TABLE.get(language_of(locale)) {
        rules.extend(layer);
    }
    if let Some(&layer) = RULE_TABLE.get(locale) {
        rules.extend(layer);
    }

    rules
}

/// Tags of all registered rule layers, sorted
#[must_use]
pub fn available_locales() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = RULE_TABLE.keys().copied().collect();
    tags.sort_unstable();
    tags
}
