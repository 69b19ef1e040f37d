//! Request token (`tk`) generation
//!
//! Every TTS request carries a token derived from its text and a key that
//! Google Translate publishes in its page (`tkk`). The hash works on the
//! UTF-8 bytes of the text with 32-bit wrapping arithmetic.

use crate::error::{ApiError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces the `tk` parameter for a piece of text
pub trait TokenProvider {
    /// Token for `text`
    fn token(&self, text: &str) -> Result<String>;
}

/// The `tkk` key: `<hours>.<offset>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenKey {
    /// Hours since the epoch when the key was issued
    pub hours: i64,
    /// Key offset
    pub offset: i64,
}

impl TokenKey {
    /// Create a key from its parts
    pub fn new(hours: i64, offset: i64) -> Self {
        Self { hours, offset }
    }

    /// Parse `<hours>.<offset>`
    pub fn parse(key: &str) -> Result<Self> {
        let invalid = || ApiError::InvalidTokenKey(key.to_string());
        let (hours, offset) = key.trim().split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            hours: hours.parse().map_err(|_| invalid())?,
            offset: offset.parse().map_err(|_| invalid())?,
        })
    }

    /// Extract the key from a translate page
    ///
    /// Falls back to `<current hours>.<a + b>` when the page only carries
    /// the obfuscated `a`/`b` form.
    pub fn from_page(page: &str) -> Result<Self> {
        let hours = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() / 3600)
            .unwrap_or_default();
        Self::from_page_at(page, hours as i64)
    }

    /// Like [`TokenKey::from_page`] with an explicit fallback hour count
    pub fn from_page_at(page: &str, hours: i64) -> Result<Self> {
        let expr = tkk_regex()
            .captures(page)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(ApiError::TokenKeyNotFound)?;

        if let Some(found) = key_regex().find(expr) {
            return Self::parse(found.as_str());
        }

        tracing::debug!("token key not literal, summing a and b");
        let part = |re: &Regex| -> i64 {
            re.captures(expr)
                .and_then(|caps| caps[1].parse().ok())
                .unwrap_or(0)
        };
        let a = part(a_regex());
        let b = part(b_regex());
        Ok(Self::new(hours, a.wrapping_add(b)))
    }
}

impl FromStr for TokenKey {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.hours, self.offset)
    }
}

fn tkk_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(tkk:.*?),").expect("tkk pattern is valid"))
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{6}\.[0-9]+").expect("key pattern is valid"))
}

fn a_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"a\\+x3d(-?\d+);").expect("a pattern is valid"))
}

fn b_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"b\\+x3d(-?\d+);").expect("b pattern is valid"))
}

/// Mix `a` through a sequence of 3-byte shift/add/xor operations
fn rotate(mut a: i64, ops: &[u8]) -> i64 {
    for op in ops.chunks_exact(3) {
        let shift = match op[2] {
            c @ b'a'..=b'z' => u32::from(c - 87),
            c => u32::from(c - b'0'),
        };
        let d = if op[1] == b'+' {
            i64::from((a as u32) >> shift)
        } else {
            i64::from((a as i32).wrapping_shl(shift))
        };
        a = if op[0] == b'+' {
            i64::from(a.wrapping_add(d) as i32)
        } else {
            i64::from((a as i32) ^ (d as i32))
        };
    }
    a
}

/// Compute the `tk` token of `text` under `key`
pub fn calculate_token(text: &str, key: &TokenKey) -> String {
    let mut a = key.hours;
    for byte in text.bytes() {
        a = a.wrapping_add(i64::from(byte));
        a = rotate(a, b"+-a^+6");
    }
    a = rotate(a, b"+-3^+b+-f");
    a = i64::from((a as i32) ^ (key.offset as i32));
    if a < 0 {
        a = i64::from(a as u32);
    }
    a %= 1_000_000;

    format!("{a}.{}", (a as i32) ^ (key.hours as i32))
}

/// Token provider backed by a known key
#[derive(Debug, Clone, Copy)]
pub struct TkkTokenProvider {
    key: TokenKey,
}

impl TkkTokenProvider {
    /// Use `key` for every token
    pub fn new(key: TokenKey) -> Self {
        Self { key }
    }

    /// The key in use
    pub fn key(&self) -> TokenKey {
        self.key
    }
}

impl TokenProvider for TkkTokenProvider {
    fn token(&self, text: &str) -> Result<String> {
        Ok(calculate_token(text, &self.key))
    }
}
