use super::SymbolConfig;
use std::sync::OnceLock;

/// Source of the embedded default symbol set
pub const DEFAULT_SYMBOLS_TOML: &str = include_str!("../../configs/symbols/default.toml");

static DEFAULT_SYMBOLS: OnceLock<SymbolConfig> = OnceLock::new();

/// The embedded default symbol set, parsed on first use
pub fn default_symbols() -> &'static SymbolConfig {
    DEFAULT_SYMBOLS.get_or_init(|| {
        SymbolConfig::from_toml_str(DEFAULT_SYMBOLS_TOML)
            .expect("embedded default symbols must be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols_content() {
        let symbols = default_symbols();
        assert_eq!(symbols.metadata.name, "default");
        assert_eq!(symbols.punctuation.all, "?!？！.,¡()[]¿…‥،;:—。，、：\n");
        assert_eq!(symbols.punctuation.tone_marks, "?!？！");
        assert_eq!(symbols.punctuation.period_comma, ".,");
        assert_eq!(symbols.punctuation.colon, ":");
        assert_eq!(symbols.abbreviations.words.len(), 9);
        assert_eq!(
            symbols.substitutions.pairs,
            vec![vec!["M.".to_string(), "Monsieur".to_string()]]
        );
    }

    #[test]
    fn test_default_symbols_parsed_once() {
        let first = default_symbols();
        let second = default_symbols();
        assert!(std::ptr::eq(first, second));
    }
}
