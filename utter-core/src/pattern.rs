//! Pattern compilation
//!
//! Builds a single alternation from a list of fragments. Every fragment is
//! escaped (unless it already is pattern source), passed through a
//! [`Template`], and the results are joined with `|` in their original
//! order:
//!
//! ```rust
//! use utter_core::pattern::{compile_pattern, Flags, Fragment, Template};
//!
//! let pattern = compile_pattern(
//!     &Fragment::chars("abc"),
//!     &Template::suffix(r"\."),
//!     Flags::NONE,
//! )
//! .unwrap();
//! assert_eq!(pattern.source(), r"a\.|b\.|c\.");
//! ```

use crate::error::{CoreError, Result};
use fancy_regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Characters that carry meaning in pattern source
const METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escape `text` so that it matches itself literally
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// One atom of an alternation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Literal text, escaped before templating
    Literal(String),
    /// Pattern source, used as-is
    Pattern(String),
}

impl Fragment {
    /// Literal fragment
    pub fn literal(text: impl Into<String>) -> Self {
        Fragment::Literal(text.into())
    }

    /// Pre-built pattern source
    pub fn pattern(source: impl Into<String>) -> Self {
        Fragment::Pattern(source.into())
    }

    /// One literal fragment per character of `text`
    pub fn chars(text: &str) -> Vec<Fragment> {
        text.chars().map(Fragment::from).collect()
    }

    /// One literal fragment per word
    pub fn words<I, S>(words: I) -> Vec<Fragment>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().map(|w| Fragment::Literal(w.into())).collect()
    }

    /// Text handed to the template
    fn prepared(&self) -> Cow<'_, str> {
        match self {
            Fragment::Literal(text) => Cow::Owned(escape(text)),
            Fragment::Pattern(source) => Cow::Borrowed(source),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<char> for Fragment {
    fn from(ch: char) -> Self {
        Fragment::Literal(ch.to_string())
    }
}

/// Maps an escaped fragment to one alternative of the final pattern
#[derive(Debug, Clone)]
pub enum Template {
    /// The fragment itself, NFC-normalized
    Identity,
    /// `(x)`
    Group,
    /// `prefix` + x + `suffix`
    Wrap {
        /// Pattern text placed before the fragment
        prefix: String,
        /// Pattern text placed after the fragment
        suffix: String,
    },
    /// `(?<=x)` + `suffix`
    Lookbehind {
        /// Pattern text placed after the lookbehind
        suffix: String,
    },
    /// Arbitrary pure mapping
    Custom(fn(&str) -> String),
}

impl Template {
    /// Append pattern text after the fragment
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Template::Wrap {
            prefix: String::new(),
            suffix: suffix.into(),
        }
    }

    /// Put pattern text in front of the fragment
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Template::Wrap {
            prefix: prefix.into(),
            suffix: String::new(),
        }
    }

    /// Surround the fragment with pattern text
    pub fn wrap(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Template::Wrap {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Match `suffix` right after an occurrence of the fragment
    pub fn lookbehind(suffix: impl Into<String>) -> Self {
        Template::Lookbehind {
            suffix: suffix.into(),
        }
    }

    /// Render one alternative
    pub fn render(&self, fragment: &str) -> String {
        match self {
            Template::Identity => fragment.nfc().collect(),
            Template::Group => format!("({fragment})"),
            Template::Wrap { prefix, suffix } => format!("{prefix}{fragment}{suffix}"),
            Template::Lookbehind { suffix } => format!("(?<={fragment}){suffix}"),
            Template::Custom(func) => func(fragment),
        }
    }
}

/// Matching flags applied to a whole compiled pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Case-insensitive matching
    pub case_insensitive: bool,
    /// `^`/`$` match at line boundaries
    pub multi_line: bool,
    /// `.` also matches `\n`
    pub dot_matches_new_line: bool,
}

impl Flags {
    /// No flags
    pub const NONE: Flags = Flags {
        case_insensitive: false,
        multi_line: false,
        dot_matches_new_line: false,
    };

    /// Case-insensitive only
    pub const IGNORE_CASE: Flags = Flags {
        case_insensitive: true,
        multi_line: false,
        dot_matches_new_line: false,
    };

    /// Toggle case-insensitivity
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Toggle multi-line mode
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Toggle dot-matches-newline
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Inline flag group, empty when no flag is set
    fn inline_group(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multi_line {
            letters.push('m');
        }
        if self.dot_matches_new_line {
            letters.push('s');
        }

        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }
}

/// An immutable compiled alternation
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    flags: Flags,
    regex: Arc<Regex>,
}

impl CompiledPattern {
    /// Compile raw pattern source
    pub fn new(source: impl Into<String>, flags: Flags) -> Result<Self> {
        let source = source.into();
        let full = format!("{}{}", flags.inline_group(), source);
        let regex = Regex::new(&full).map_err(|e| CoreError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source,
            flags,
            regex: Arc::new(regex),
        })
    }

    /// Alternation source, without the flag group
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags the pattern was compiled with
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Underlying engine regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of capture groups, including the implicit whole-match group
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.regex.is_match(text).map_err(|e| self.runtime_error(e))
    }

    pub(crate) fn runtime_error(&self, err: fancy_regex::Error) -> CoreError {
        CoreError::PatternRuntime {
            pattern: self.source.clone(),
            reason: err.to_string(),
        }
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Build one alternation from `fragments` rendered through `template`
pub fn compile_pattern(
    fragments: &[Fragment],
    template: &Template,
    flags: Flags,
) -> Result<CompiledPattern> {
    if fragments.is_empty() {
        return Err(CoreError::config("pattern needs at least one fragment"));
    }

    let alternatives: Vec<String> = fragments
        .iter()
        .map(|fragment| template.render(&fragment.prepared()))
        .collect();
    let source = alternatives.join("|");

    tracing::trace!(%source, ?flags, "compiling pattern");
    CompiledPattern::new(source, flags)
}
