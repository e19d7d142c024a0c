//! Text formatters.
//!
//! This module contains the formatting logic organized into submodules:
//! - [`iban`]: Groups account numbers into the printed IBAN form
//! - [`slug`]: Transliterates text into URL-safe slugs
//! - [`rules`]: Locale-layered character substitution table used by [`slug`]
//!
//! Both formatters implement [`TextFormatter`] and can be used interchangeably.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod iban;
pub mod rules;
pub mod slug;

pub use iban::IbanFormatter;
pub use rules::{available_locales, language_of, resolve_rules, ResolvedRules};
pub use slug::SlugFormatter;

/// A pure string-to-string transform
pub trait TextFormatter: Send + Sync {
    /// Format `value`. Never fails; every input has an output.
    fn format(&self, value: &str) -> String;
}

/// Available formatter implementations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    #[default]
    Slug,
    Iban,
}

impl FormatterKind {
    /// All kinds, in CLI display order
    pub const ALL: [FormatterKind; 2] = [FormatterKind::Slug, FormatterKind::Iban];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormatterKind::Slug => "slug",
            FormatterKind::Iban => "iban",
        }
    }

    /// Build a formatter of this kind. `locale` is ignored by IBAN formatting.
    #[must_use]
    pub fn build(self, locale: &str) -> Box<dyn TextFormatter> {
        match self {
            FormatterKind::Slug => Box::new(SlugFormatter::new(locale)),
            FormatterKind::Iban => Box::new(IbanFormatter::new()),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slug" => Ok(FormatterKind::Slug),
            "iban" => Ok(FormatterKind::Iban),
            other => Err(format!("unknown formatter '{other}' (expected slug or iban)")),
        }
    }
}
