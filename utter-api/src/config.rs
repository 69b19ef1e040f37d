//! High-level configuration API

use crate::error::{ApiError, Result};
use utter_core::{Segmenter, SymbolConfig, DEFAULT_MAX_CHARS};

/// Speech configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// IETF language tag, e.g. `en` or `pt-br`
    pub lang: String,
    /// Read more slowly
    pub slow: bool,
    /// Check `lang` against the supported list before planning requests
    pub lang_check: bool,
    /// Maximum characters per request
    pub max_chars: usize,
    /// Custom symbol set (embedded default when `None`)
    pub symbols: Option<SymbolConfig>,
    /// Split on every punctuation mark instead of the guarded rules
    pub legacy_punctuation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            slow: false,
            lang_check: true,
            max_chars: DEFAULT_MAX_CHARS,
            symbols: None,
            legacy_punctuation: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Build the segmenter this configuration describes
    pub fn segmenter(&self) -> Result<Segmenter> {
        let mut builder = Segmenter::builder()
            .max_size(self.max_chars)
            .legacy(self.legacy_punctuation);
        if let Some(symbols) = &self.symbols {
            builder = builder.symbols(symbols.clone());
        }
        Ok(builder.build()?)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.config.lang = lang.into();
        self
    }

    /// Read slowly
    pub fn slow(mut self, slow: bool) -> Self {
        self.config.slow = slow;
        self
    }

    /// Enable or disable the language check
    pub fn lang_check(mut self, lang_check: bool) -> Self {
        self.config.lang_check = lang_check;
        self
    }

    /// Set the per-request character limit
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Use a custom symbol set
    pub fn symbols(mut self, symbols: SymbolConfig) -> Self {
        self.config.symbols = Some(symbols);
        self
    }

    /// Use the unguarded punctuation split
    pub fn legacy_punctuation(mut self, legacy: bool) -> Self {
        self.config.legacy_punctuation = legacy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.lang.trim().is_empty() {
            return Err(ApiError::Config("language is required".to_string()));
        }
        if self.config.max_chars == 0 {
            return Err(ApiError::Config(
                "max_chars must be at least 1".to_string(),
            ));
        }
        if let Some(symbols) = &self.config.symbols {
            symbols.validate()?;
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.lang, "en");
        assert!(!config.slow);
        assert!(config.lang_check);
        assert_eq!(config.max_chars, 100);
        assert!(config.symbols.is_none());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            Config::builder().lang(" ").build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().max_chars(0).build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_segmenter_follows_config() {
        let config = Config::builder().max_chars(42).build().unwrap();
        assert_eq!(config.segmenter().unwrap().max_size(), 42);
    }
}
