//! Configuration management for textfmt.
//!
//! This module provides the [`Config`] struct which selects the formatter and
//! the slug locale. Configuration can be loaded from:
//! - TOML files (`textfmt.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! working directory up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::FormatterKind;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["textfmt.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

fn default_locale() -> String {
    "en_US".to_string()
}

/// Main configuration struct for textfmt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Formatter to apply (default: slug)
    #[serde(default)]
    pub formatter: FormatterKind,

    /// Locale for slug substitution rules, e.g. `de` or `de_AT` (default: `en_US`)
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub formatter: Option<FormatterKind>,
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            formatter: FormatterKind::default(),
            locale: default_locale(),
        }
    }
}

impl Config {
    /// Longest accepted locale tag
    const MAX_LOCALE_LENGTH: usize = 35;

    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid. Unknown
    /// locales are valid: they format with the default rules.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.locale.chars().count() > Self::MAX_LOCALE_LENGTH {
            return Some(format!(
                "locale '{}' exceeds maximum length of {}",
                self.locale,
                Self::MAX_LOCALE_LENGTH
            ));
        }
        if self
            .locale
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Some(format!(
                "locale {:?} must not contain whitespace or control characters",
                self.locale
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.formatter {
            self.formatter = v;
        }
        if let Some(v) = &partial.locale {
            self.locale.clone_from(v);
        }
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Discover config files for a directory
    ///
    /// Returns the home directory config followed by configs from the root
    /// down to `start_dir` (least specific first).
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        discover_in(start_dir, dirs_home().as_deref())
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        Self::from_files(&Self::discover_config_files(start_dir))
    }

    /// Merge `paths` in order; unreadable or invalid files are skipped with a warning
    fn from_files(paths: &[PathBuf]) -> Self {
        let mut config = Self::default();
        for path in paths {
            let partial = std::fs::read_to_string(path)
                .map_err(anyhow::Error::from)
                .and_then(|contents| Ok(toml::from_str::<PartialConfig>(&contents)?));
            match partial {
                Ok(partial) => config.apply_partial(&partial),
                Err(e) => eprintln!("Warning: skipping config {}: {e}", path.display()),
            }
        }
        config
    }
}

/// Config files in `home` (if any), then in each ancestor of `start_dir` from the root down
fn discover_in(start_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let candidates = home
        .into_iter()
        .chain(start_dir.ancestors().collect::<Vec<_>>().into_iter().rev())
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let mut found: Vec<PathBuf> = Vec::new();
    for path in candidates {
        if path.is_file() && !found.contains(&path) {
            found.push(path);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.formatter, FormatterKind::Slug);
        assert_eq!(config.locale, "en_US");
    }

    #[test]
    fn test_apply_partial_preserves_unset() {
        let mut base = Config {
            locale: "pl_PL".to_string(),
            ..Default::default()
        };
        let partial = PartialConfig {
            formatter: Some(FormatterKind::Iban),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.formatter, FormatterKind::Iban);
        assert_eq!(base.locale, "pl_PL");
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("textfmt.toml");
        fs::write(&path, "formatter = \"iban\"\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.formatter, FormatterKind::Iban);
        assert_eq!(config.locale, "en_US");
    }

    #[test]
    fn test_from_toml_file_rejects_unknown_formatter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("textfmt.toml");
        fs::write(&path, "formatter = \"rot13\"\n").unwrap();

        assert!(Config::from_toml_file(&path).is_err());
    }

    #[test]
    fn test_from_toml_file_missing() {
        assert!(Config::from_toml_file(Path::new("/nonexistent/textfmt.toml")).is_err());
    }

    #[test]
    fn test_discovered_files_nearer_overrides() {
        let home = tempdir().unwrap();
        let root = tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(home.path().join("textfmt.toml"), "locale = \"sv\"\n").unwrap();
        fs::write(
            root.path().join("textfmt.toml"),
            "formatter = \"iban\"\nlocale = \"de\"\n",
        )
        .unwrap();
        fs::write(nested.join("textfmt.toml"), "locale = \"de_AT\"\n").unwrap();

        // Ignore any configs that happen to live above the temp directories
        let files: Vec<PathBuf> = discover_in(&nested, Some(home.path()))
            .into_iter()
            .filter(|f| f.starts_with(home.path()) || f.starts_with(root.path()))
            .collect();
        assert_eq!(
            files,
            vec![
                home.path().join("textfmt.toml"),
                root.path().join("textfmt.toml"),
                nested.join("textfmt.toml"),
            ]
        );

        let config = Config::from_files(&files);
        assert_eq!(config.formatter, FormatterKind::Iban);
        assert_eq!(config.locale, "de_AT");
    }

    #[test]
    fn test_home_config_is_lowest_priority() {
        let home = tempdir().unwrap();
        let project = tempdir().unwrap();
        fs::write(
            home.path().join("textfmt.toml"),
            "formatter = \"iban\"\nlocale = \"pl\"\n",
        )
        .unwrap();
        fs::write(project.path().join("textfmt.toml"), "locale = \"tr_TR\"\n").unwrap();

        let config = Config::from_files(&discover_in(project.path(), Some(home.path())));
        assert_eq!(config.formatter, FormatterKind::Iban);
        assert_eq!(config.locale, "tr_TR");
    }

    #[test]
    fn test_discover_without_configs() {
        let home = tempdir().unwrap();
        let project = tempdir().unwrap();
        let files = discover_in(project.path(), Some(home.path()));
        assert!(files
            .iter()
            .all(|f| !f.starts_with(home.path()) && !f.starts_with(project.path())));
    }

    #[test]
    fn test_invalid_config_file_skipped() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        fs::write(&bad, "formatter = 42\n").unwrap();
        fs::write(&good, "locale = \"de\"\n").unwrap();

        let config = Config::from_files(&[good, bad]);
        assert_eq!(config.locale, "de");
        assert_eq!(config.formatter, FormatterKind::Slug);
    }

    #[test]
    fn test_toml_string_roundtrips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("textfmt.toml");
        let config = Config {
            formatter: FormatterKind::Iban,
            locale: "de_AT".to_string(),
        };
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("formatter = \"iban\""));

        fs::write(&path, toml).unwrap();
        assert_eq!(Config::from_toml_file(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_none());
    }

    #[test]
    fn test_validate_unknown_locale_is_valid() {
        let config = Config {
            locale: "xx".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_none());
    }

    #[test]
    fn test_validate_locale_whitespace() {
        let config = Config {
            locale: "de AT".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("locale"));
    }

    #[test]
    fn test_validate_locale_too_long() {
        let config = Config {
            locale: "x".repeat(64),
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }
}
