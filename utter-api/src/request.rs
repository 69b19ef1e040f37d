//! TTS request planning
//!
//! Builds the query for every token of a text. Sending the requests and
//! writing the audio is up to the caller.

use crate::error::{ApiError, Result};
use std::fmt;

/// TTS endpoint
pub const TTS_URL: &str = "https://translate.google.com/translate_tts";

/// `Referer` header sent with every request
pub const REFERER: &str = "http://translate.google.com/";

/// `User-Agent` header sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/47.0.2526.106 Safari/537.36";

/// Headers for every TTS request
pub fn headers() -> [(&'static str, &'static str); 2] {
    [("Referer", REFERER), ("User-Agent", USER_AGENT)]
}

/// Reading speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    /// 0.3
    Slow,
    /// 1
    #[default]
    Normal,
}

impl Speed {
    /// Speed for the `slow` flag
    pub fn from_slow(slow: bool) -> Self {
        if slow {
            Speed::Slow
        } else {
            Speed::Normal
        }
    }

    /// Value of the `ttsspeed` parameter
    pub fn value(self) -> f32 {
        match self {
            Speed::Slow => 0.3,
            Speed::Normal => 1.0,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Slow => f.write_str("0.3"),
            Speed::Normal => f.write_str("1"),
        }
    }
}

/// One TTS request, for one token
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TtsRequest {
    /// Position of the token, from 0
    pub idx: usize,
    /// Number of tokens in the text
    pub total: usize,
    /// Token text
    pub text: String,
    /// `tk` parameter
    pub token: String,
    /// Language code
    pub lang: String,
    /// Reading speed
    pub speed: Speed,
}

impl TtsRequest {
    /// Length of the text as the service counts it (UTF-16 code units)
    pub fn text_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Query parameters, in request order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("client", "tw-ob".to_string()),
            ("idx", self.idx.to_string()),
            ("ie", "UTF-8".to_string()),
            ("q", self.text.clone()),
            ("textlen", self.text_len().to_string()),
            ("tk", self.token.clone()),
            ("tl", self.lang.clone()),
            ("total", self.total.to_string()),
            ("ttsspeed", self.speed.to_string()),
        ]
    }

    /// Full URL with a percent-encoded query
    pub fn to_url(&self, base: &str) -> String {
        let query = self
            .params()
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{base}?{query}")
    }

    /// JSON object describing the request
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Map an HTTP status of a TTS response to an error
///
/// A 404 means an unsupported language only when the language was not
/// checked up front.
pub fn check_status(status: u16, lang_checked: bool, lang: &str) -> Result<()> {
    match status {
        403 => Err(ApiError::BadToken),
        404 if !lang_checked => Err(ApiError::UnsupportedLanguage {
            code: lang.to_string(),
        }),
        s if s >= 500 => Err(ApiError::Upstream { status: s }),
        _ => Ok(()),
    }
}
