//! Symbol sets driving the rewrite and boundary rules
//!
//! Everything language-specific (punctuation, tone marks, abbreviations,
//! substitutions) lives in a TOML file so rules can be swapped without
//! touching code. The default set is embedded in the binary.

mod loader;

pub use loader::{default_symbols, DEFAULT_SYMBOLS_TOML};

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete symbol configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,
    pub punctuation: PunctuationConfig,
    #[serde(default)]
    pub abbreviations: AbbreviationConfig,
    #[serde(default)]
    pub substitutions: SubstitutionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuationConfig {
    pub all: String,
    #[serde(default)]
    pub tone_marks: String,
    #[serde(default)]
    pub period_comma: String,
    #[serde(default)]
    pub colon: String,
}

impl PunctuationConfig {
    /// Characters of `all` not claimed by the tone-mark, period/comma or colon rules
    pub fn other(&self) -> String {
        let mut other = String::new();
        for ch in self.all.chars() {
            let claimed = self.tone_marks.contains(ch)
                || self.period_comma.contains(ch)
                || self.colon.contains(ch);
            if !claimed && !other.contains(ch) {
                other.push(ch);
            }
        }
        other
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default = "default_true")]
    pub ignore_case: bool,
    #[serde(default)]
    pub pairs: Vec<Vec<String>>,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            pairs: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl SymbolConfig {
    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SymbolConfig = toml::from_str(content)
            .map_err(|e| CoreError::config(format!("failed to parse symbol TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Configuration(msg) => {
                CoreError::config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CoreError::config(format!("failed to render symbol TOML: {e}")))
    }

    /// Check the sets are usable together
    pub fn validate(&self) -> Result<()> {
        let punctuation = &self.punctuation;
        if punctuation.all.is_empty() {
            return Err(CoreError::config("punctuation.all must not be empty"));
        }

        for (field, chars) in [
            ("tone_marks", &punctuation.tone_marks),
            ("period_comma", &punctuation.period_comma),
            ("colon", &punctuation.colon),
        ] {
            if let Some(ch) = chars.chars().find(|&c| !punctuation.all.contains(c)) {
                return Err(CoreError::config(format!(
                    "punctuation.{field} contains {ch:?} which is missing from punctuation.all"
                )));
            }
        }

        if self.abbreviations.words.iter().any(|w| w.trim().is_empty()) {
            return Err(CoreError::config("abbreviations.words contains an empty entry"));
        }

        for pair in &self.substitutions.pairs {
            match pair.as_slice() {
                [pattern, _] if !pattern.is_empty() => {}
                [_, _] => return Err(CoreError::config("substitution pattern is empty")),
                [pattern] => {
                    return Err(CoreError::config(format!(
                        "substitution pair '{pattern}' is missing its replacement"
                    )))
                }
                other => {
                    return Err(CoreError::config(format!(
                        "substitution pair must have 2 entries, found {}",
                        other.len()
                    )))
                }
            }
        }

        Ok(())
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        default_symbols().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
        [punctuation]
        all = ".!"
        tone_marks = "!"
        period_comma = "."
    "#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = SymbolConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.punctuation.colon, "");
        assert!(config.abbreviations.words.is_empty());
        assert!(config.substitutions.ignore_case);
        assert!(config.substitutions.pairs.is_empty());
    }

    #[test]
    fn test_other_punctuation_excludes_guarded_sets() {
        let config = default_symbols();
        let other = config.punctuation.other();
        for ch in "?!？！.,:".chars() {
            assert!(!other.contains(ch), "{ch:?} should be excluded");
        }
        for ch in "¡()[]¿…‥،;—。，、：\n".chars() {
            assert!(other.contains(ch), "{ch:?} should be kept");
        }
    }

    #[test]
    fn test_other_punctuation_deduplicates() {
        let punctuation = PunctuationConfig {
            all: ";;((".to_string(),
            tone_marks: String::new(),
            period_comma: String::new(),
            colon: String::new(),
        };
        assert_eq!(punctuation.other(), ";(");
    }

    #[test]
    fn test_tone_marks_must_be_punctuation() {
        let toml_str = r#"
            [punctuation]
            all = "."
            tone_marks = "!"
        "#;
        let err = SymbolConfig::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("tone_marks"));
    }

    #[test]
    fn test_empty_punctuation_rejected() {
        let toml_str = r#"
            [punctuation]
            all = ""
        "#;
        assert!(matches!(
            SymbolConfig::from_toml_str(toml_str),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_substitution_pair_missing_replacement() {
        let toml_str = r#"
            [punctuation]
            all = "."

            [substitutions]
            pairs = [["Esq."]]
        "#;
        let err = SymbolConfig::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("missing its replacement"));
    }

    #[test]
    fn test_blank_abbreviation_rejected() {
        let toml_str = r#"
            [punctuation]
            all = "."

            [abbreviations]
            words = ["dr", " "]
        "#;
        assert!(SymbolConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = SymbolConfig::from_toml_str("[punctuation").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{MINIMAL}").unwrap();
        let config = SymbolConfig::from_file(file.path()).unwrap();
        assert_eq!(config.punctuation.all, ".!");
    }

    #[test]
    fn test_from_missing_file() {
        let err = SymbolConfig::from_file(Path::new("/nonexistent/symbols.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_toml_round_trip_preserves_default() {
        let rendered = default_symbols().to_toml_string().unwrap();
        let parsed = SymbolConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(&parsed, default_symbols());
    }
}
