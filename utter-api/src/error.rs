//! API error types

use thiserror::Error;
use utter_core::CoreError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Segmentation error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The text to speak was empty
    #[error("no text to speak")]
    NoText,

    /// Segmentation left nothing to send
    #[error("no text to send to the TTS API")]
    NoSpeakableText,

    /// The language is not in the supported list
    #[error("language not supported: {code}")]
    UnsupportedLanguage {
        /// Requested language code
        code: String,
    },

    /// The language list could not be built
    #[error("unable to get language list: {0}")]
    LanguageList(String),

    /// Token key text is malformed
    #[error("invalid token key '{0}': expected '<hours>.<offset>'")]
    InvalidTokenKey(String),

    /// No token key in the translate page
    #[error("unable to find token seed in page")]
    TokenKeyNotFound,

    /// The service rejected the request token (HTTP 403)
    #[error("bad token or upstream API changes")]
    BadToken,

    /// The service failed (HTTP 5xx)
    #[error("upstream API error (status {status}), try again later")]
    Upstream {
        /// HTTP status code
        status: u16,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
