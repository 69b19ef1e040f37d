//! Google Translate text-to-speech request planning
//!
//! Wraps [`utter_core`] segmentation with what the TTS endpoint needs: a
//! supported language, a request token per chunk and numbered request
//! parameters. No network I/O happens here; language lists and token keys
//! come from whatever the caller downloaded.
//!
//! ```rust
//! use utter_api::{Config, Speech, TkkTokenProvider, TokenKey};
//!
//! let config = Config::builder().lang("en").build().unwrap();
//! let speech = Speech::new("Hello! How are you?", config).unwrap();
//! let provider = TkkTokenProvider::new(TokenKey::parse("406986.2817744745").unwrap());
//!
//! let requests = speech.requests(&provider).unwrap();
//! assert_eq!(requests.len(), 1);
//! assert_eq!(requests[0].total, 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lang;
pub mod request;
pub mod token;

use utter_core::Segmenter;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use error::{ApiError, Result};
pub use lang::{
    extra_languages, tts_languages, LanguageMap, LanguageSource, ScrapedLanguages,
    StaticLanguages,
};
pub use request::{check_status, Speed, TtsRequest, TTS_URL};
pub use token::{calculate_token, TkkTokenProvider, TokenKey, TokenProvider};

/// Text prepared for the TTS endpoint
#[derive(Debug, Clone)]
pub struct Speech {
    text: String,
    config: Config,
    segmenter: Segmenter,
}

impl Speech {
    /// Prepare `text` for reading
    ///
    /// Fails with [`ApiError::NoText`] for empty or whitespace-only text.
    pub fn new(text: impl Into<String>, config: Config) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ApiError::NoText);
        }
        let segmenter = config.segmenter()?;
        Ok(Self {
            text,
            config,
            segmenter,
        })
    }

    /// Original text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reading speed
    pub fn speed(&self) -> Speed {
        Speed::from_slow(self.config.slow)
    }

    /// Chunks of text to send, one request each
    ///
    /// Fails with [`ApiError::NoSpeakableText`] when segmentation leaves
    /// nothing but punctuation.
    pub fn tokens(&self) -> Result<Vec<String>> {
        let tokens = self.segmenter.segment(&self.text)?;
        if tokens.is_empty() {
            return Err(ApiError::NoSpeakableText);
        }
        tracing::debug!(count = tokens.len(), "tokenized speech");
        Ok(tokens)
    }

    /// Ensure the configured language is supported
    ///
    /// Does nothing when the language check is disabled.
    pub fn check_language(&self, source: &dyn LanguageSource) -> Result<()> {
        if !self.config.lang_check {
            return Ok(());
        }
        let languages = tts_languages(source)?;
        if lang::is_supported(&languages, &self.config.lang) {
            Ok(())
        } else {
            Err(ApiError::UnsupportedLanguage {
                code: self.config.lang.clone(),
            })
        }
    }

    /// One request per token, numbered in order
    pub fn requests(&self, provider: &dyn TokenProvider) -> Result<Vec<TtsRequest>> {
        let tokens = self.tokens()?;
        let total = tokens.len();
        let speed = self.speed();

        tokens
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                let token = provider.token(&text)?;
                Ok(TtsRequest {
                    idx,
                    total,
                    text,
                    token,
                    lang: self.config.lang.clone(),
                    speed,
                })
            })
            .collect()
    }
}
