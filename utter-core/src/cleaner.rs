//! Removal of tokens with nothing to speak

use crate::error::{CoreError, Result};
use crate::symbols::SymbolConfig;
use regex::Regex;

/// Drops tokens made only of punctuation and whitespace
#[derive(Debug, Clone)]
pub struct Cleaner {
    noise: Regex,
}

impl Cleaner {
    /// Treat every character of `punctuation` (plus whitespace) as noise
    pub fn new(punctuation: &str) -> Result<Self> {
        let class: String = punctuation
            .chars()
            .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
            .collect();
        let source = format!(r"^[{class}\s]*$");
        let noise = Regex::new(&source).map_err(|e| CoreError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { noise })
    }

    /// Cleaner for the full punctuation set of `symbols`
    pub fn from_symbols(symbols: &SymbolConfig) -> Result<Self> {
        Self::new(&symbols.punctuation.all)
    }

    /// Whether `token` has no speakable content
    pub fn is_noise(&self, token: &str) -> bool {
        self.noise.is_match(token)
    }

    /// Keep the speakable tokens, in order and unaltered
    pub fn clean<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let kept: Vec<String> = tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !self.is_noise(token))
            .map(str::to_string)
            .collect();
        tracing::trace!(before = tokens.len(), after = kept.len(), "cleaned tokens");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::default_symbols;

    fn cleaner() -> Cleaner {
        Cleaner::from_symbols(default_symbols()).unwrap()
    }

    #[test]
    fn test_punctuation_and_whitespace_dropped() {
        assert_eq!(cleaner().clean(&[" . ", "hello", "  ", "!!"]), vec!["hello"]);
    }

    #[test]
    fn test_kept_tokens_untouched() {
        assert_eq!(
            cleaner().clean(&["Xavier ", " ", "world.", ""]),
            vec!["Xavier ", "world."]
        );
    }

    #[test]
    fn test_multi_script_noise() {
        let cleaner = cleaner();
        assert!(cleaner.is_noise("。，、"));
        assert!(cleaner.is_noise("¿…\n"));
        assert!(cleaner.is_noise("[ ]"));
        assert!(!cleaner.is_noise("好"));
        assert!(!cleaner.is_noise("-"));
    }

    #[test]
    fn test_class_metacharacters_escaped() {
        let cleaner = Cleaner::new("^-]\\").unwrap();
        assert!(cleaner.is_noise("^ - ] \\"));
        assert!(!cleaner.is_noise("a-z"));
    }

    #[test]
    fn test_idempotent() {
        let cleaner = cleaner();
        let once = cleaner.clean(&["a", "..", "b", " "]);
        assert_eq!(cleaner.clean(&once), once);
    }
}
