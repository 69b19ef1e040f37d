//! Supported TTS languages
//!
//! The language list is the union of the languages Google Translate
//! advertises and a fixed table of dialects that the TTS endpoint is known
//! to accept. Fetching the translate page is left to the caller; this module
//! only parses what was downloaded.

use crate::error::{ApiError, Result};
use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Base URL of Google Translate
pub const TRANSLATE_URL: &str = "http://translate.google.com";

/// Script that lists the TTS-enabled language codes
pub const LANGUAGE_SCRIPT: &str = "translate_m.js";

/// Language code to English name
pub type LanguageMap = BTreeMap<String, String>;

/// Anything that can list supported languages
pub trait LanguageSource {
    /// Supported languages
    fn languages(&self) -> Result<LanguageMap>;
}

/// Dialects and accents accepted by the TTS endpoint but not listed by
/// Google Translate
pub fn extra_languages() -> LanguageMap {
    [
        ("zh-cn", "Chinese (Mandarin/China)"),
        ("zh-tw", "Chinese (Mandarin/Taiwan)"),
        ("en-us", "English (US)"),
        ("en-ca", "English (Canada)"),
        ("en-uk", "English (UK)"),
        ("en-gb", "English (UK)"),
        ("en-au", "English (Australia)"),
        ("en-gh", "English (Ghana)"),
        ("en-in", "English (India)"),
        ("en-ie", "English (Ireland)"),
        ("en-nz", "English (New Zealand)"),
        ("en-ng", "English (Nigeria)"),
        ("en-ph", "English (Philippines)"),
        ("en-za", "English (South Africa)"),
        ("en-tz", "English (Tanzania)"),
        ("fr-ca", "French (Canada)"),
        ("fr-fr", "French (France)"),
        ("pt-br", "Portuguese (Brazil)"),
        ("pt-pt", "Portuguese (Portugal)"),
        ("es-es", "Spanish (Spain)"),
        ("es-us", "Spanish (United States)"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

/// A fixed, caller-supplied language list
#[derive(Debug, Clone, Default)]
pub struct StaticLanguages {
    languages: LanguageMap,
}

impl StaticLanguages {
    /// Wrap a map
    pub fn new(languages: LanguageMap) -> Self {
        Self { languages }
    }
}

impl From<LanguageMap> for StaticLanguages {
    fn from(languages: LanguageMap) -> Self {
        Self::new(languages)
    }
}

impl LanguageSource for StaticLanguages {
    fn languages(&self) -> Result<LanguageMap> {
        Ok(self.languages.clone())
    }
}

/// Languages scraped from a downloaded translate page and its language script
#[derive(Debug, Clone)]
pub struct ScrapedLanguages {
    page: String,
    script: String,
}

impl ScrapedLanguages {
    /// `page` is the translate page HTML, `script` the content of
    /// [`LANGUAGE_SCRIPT`]
    pub fn new(page: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            script: script.into(),
        }
    }
}

impl LanguageSource for ScrapedLanguages {
    fn languages(&self) -> Result<LanguageMap> {
        let codes = parse_tts_codes(&self.script)?;
        if codes.is_empty() {
            return Err(ApiError::LanguageList(
                "no language codes in script".to_string(),
            ));
        }
        let languages = parse_language_names(&self.page, &codes);
        tracing::debug!(
            codes = codes.len(),
            languages = languages.len(),
            "scraped languages"
        );
        Ok(languages)
    }
}

fn script_src_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<script[^>]*\bsrc\s*=\s*["']([^"']*translate_m\.js[^"']*)["']"#)
            .expect("script src pattern is valid")
    })
}

fn language_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{code:'(.+?[^'])',name:'(.+?[^'])'\}").expect("language name pattern is valid")
    })
}

fn tts_code_regex() -> &'static FancyRegex {
    static RE: OnceLock<FancyRegex> = OnceLock::new();
    RE.get_or_init(|| {
        FancyRegex::new(r#"[{,"](\w{2}|\w{2}-\w{2,3})(?=:1|":1)"#)
            .expect("language code pattern is valid")
    })
}

/// Path of the language script referenced by the translate page
pub fn find_script_path(page: &str) -> Option<String> {
    script_src_regex()
        .captures(page)
        .map(|caps| caps[1].to_string())
}

/// Absolute URL of a script path found by [`find_script_path`]
pub fn script_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{TRANSLATE_URL}/{}", path.trim_start_matches('/'))
    }
}

/// Language codes the script marks as speakable
///
/// Loose on purpose: the script is minified, so stray matches are expected
/// and filtered out by [`parse_language_names`].
pub fn parse_tts_codes(script: &str) -> Result<Vec<String>> {
    let mut codes = Vec::new();
    for caps in tts_code_regex().captures_iter(script) {
        let caps = caps.map_err(|e| ApiError::LanguageList(e.to_string()))?;
        if let Some(code) = caps.get(1) {
            codes.push(code.as_str().to_string());
        }
    }
    Ok(codes)
}

/// Names from the page's language menu, restricted to `codes`
pub fn parse_language_names(page: &str, codes: &[String]) -> LanguageMap {
    language_name_regex()
        .captures_iter(page)
        .filter(|caps| codes.iter().any(|code| code == &caps[1]))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Every language the TTS endpoint accepts: `source` plus the dialect table
pub fn tts_languages(source: &dyn LanguageSource) -> Result<LanguageMap> {
    let mut languages = source.languages().map_err(|e| match e {
        e @ ApiError::LanguageList(_) => e,
        other => ApiError::LanguageList(other.to_string()),
    })?;
    languages.extend(extra_languages());
    Ok(languages)
}

/// Whether `lang` is in `languages`, ignoring case
pub fn is_supported(languages: &LanguageMap, lang: &str) -> bool {
    languages.keys().any(|code| code.eq_ignore_ascii_case(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <script src="/translate/releases/twsfe_w_20190503_RC01/r/js/translate_m.js"></script>
        </head><body><script>
        var langs=[{code:'auto',name:'Detect language'},{code:'af',name:'Afrikaans'},
        {code:'ar',name:'Arabic'},{code:'de',name:'German'},{code:'zh-CN',name:'Chinese'}];
        </script></body></html>"#;

    const SCRIPT: &str = r#"var x=12;Fv={af:1,ar:1,de:1,"zh-cn":1,"zh-tw":1};is=7"#;

    #[test]
    fn test_find_script_path() {
        let path = find_script_path(PAGE).unwrap();
        assert_eq!(
            path,
            "/translate/releases/twsfe_w_20190503_RC01/r/js/translate_m.js"
        );
        assert_eq!(
            script_url(&path),
            "http://translate.google.com/translate/releases/twsfe_w_20190503_RC01/r/js/translate_m.js"
        );
        assert!(find_script_path("<html></html>").is_none());
    }

    #[test]
    fn test_parse_tts_codes() {
        assert_eq!(
            parse_tts_codes(SCRIPT).unwrap(),
            vec!["af", "ar", "de", "zh-cn", "zh-tw"]
        );
    }

    #[test]
    fn test_parse_language_names_filters_by_code() {
        let codes = vec!["af".to_string(), "de".to_string()];
        let names = parse_language_names(PAGE, &codes);
        assert_eq!(names.len(), 2);
        assert_eq!(names["af"], "Afrikaans");
        assert_eq!(names["de"], "German");
    }

    #[test]
    fn test_scraped_languages() {
        let source = ScrapedLanguages::new(PAGE, SCRIPT);
        let languages = source.languages().unwrap();
        assert_eq!(
            languages.keys().collect::<Vec<_>>(),
            vec!["af", "ar", "de"]
        );
    }

    #[test]
    fn test_scraped_languages_without_codes() {
        let source = ScrapedLanguages::new(PAGE, "nothing here");
        assert!(matches!(
            source.languages(),
            Err(ApiError::LanguageList(_))
        ));
    }

    #[test]
    fn test_tts_languages_adds_dialects() {
        let source = StaticLanguages::new(
            [("en".to_string(), "English".to_string())]
                .into_iter()
                .collect(),
        );
        let languages = tts_languages(&source).unwrap();
        assert_eq!(languages.len(), 1 + extra_languages().len());
        assert!(is_supported(&languages, "EN"));
        assert!(is_supported(&languages, "pt-BR"));
        assert!(!is_supported(&languages, "xx"));
    }

    #[test]
    fn test_extra_languages_table() {
        let extras = extra_languages();
        assert_eq!(extras.len(), 21);
        assert_eq!(extras["en-gb"], "English (UK)");
        assert_eq!(extras["es-us"], "Spanish (United States)");
    }
}
