//! Boundary detection
//!
//! Each boundary rule is an independently compiled pattern. A
//! [`BoundaryMatcher`] joins them into one case-insensitive alternation and
//! splits text on it; matched delimiter text is dropped.

use crate::error::{CoreError, Result};
use crate::pattern::{compile_pattern, CompiledPattern, Flags, Fragment, Template};
use crate::symbols::SymbolConfig;
use std::fmt;

/// A named boundary pattern
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRule {
    name: String,
    pattern: CompiledPattern,
}

impl BoundaryRule {
    /// Name an already compiled pattern
    pub fn new(name: impl Into<String>, pattern: CompiledPattern) -> Self {
        Self {
            name: name.into(),
            pattern,
        }
    }

    /// Rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled pattern
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }
}

/// Match the character following a tone-modifying mark
///
/// Keeps the mark itself in the preceding segment. Expects the tone-mark
/// spacer to have run so the matched character is a space.
pub fn tone_marks(marks: &str) -> Result<BoundaryRule> {
    let pattern = compile_pattern(
        &Fragment::chars(marks),
        &Template::lookbehind("."),
        Flags::NONE,
    )?;
    Ok(BoundaryRule::new("tone_marks", pattern))
}

/// Match a period or comma followed by a space, unless preceded by `.<letter>`
///
/// Won't cut dotted abbreviations like "e.g." or numbers like "3.14".
pub fn period_comma(chars: &str) -> Result<BoundaryRule> {
    let pattern = compile_pattern(
        &Fragment::chars(chars),
        &Template::wrap(r"(?<!\.[a-z])", " "),
        Flags::NONE,
    )?;
    Ok(BoundaryRule::new("period_comma", pattern))
}

/// Match a colon unless it follows a digit (keeps "10:01" whole)
pub fn colon(chars: &str) -> Result<BoundaryRule> {
    let pattern = compile_pattern(
        &Fragment::chars(chars),
        &Template::prefix(r"(?<!\d)"),
        Flags::NONE,
    )?;
    Ok(BoundaryRule::new("colon", pattern))
}

/// Match any punctuation not handled by the guarded rules
pub fn other_punctuation(symbols: &SymbolConfig) -> Result<BoundaryRule> {
    let other = symbols.punctuation.other();
    let pattern = compile_pattern(&Fragment::chars(&other), &Template::Identity, Flags::NONE)?;
    Ok(BoundaryRule::new("other_punctuation", pattern))
}

/// Match every punctuation character, with no guards
///
/// Use as the only rule for the older, cruder tokenization.
pub fn legacy_all_punctuation(all: &str) -> Result<BoundaryRule> {
    let pattern = compile_pattern(&Fragment::chars(all), &Template::Identity, Flags::NONE)?;
    Ok(BoundaryRule::new("legacy_all_punctuation", pattern))
}

/// Default rule list: tone marks, period/comma, colon, other punctuation
///
/// Rules whose character set is empty are left out.
pub fn default_rules(symbols: &SymbolConfig) -> Result<Vec<BoundaryRule>> {
    let punctuation = &symbols.punctuation;
    let mut rules = Vec::with_capacity(4);

    if !punctuation.tone_marks.is_empty() {
        rules.push(tone_marks(&punctuation.tone_marks)?);
    }
    if !punctuation.period_comma.is_empty() {
        rules.push(period_comma(&punctuation.period_comma)?);
    }
    if !punctuation.colon.is_empty() {
        rules.push(colon(&punctuation.colon)?);
    }
    if !punctuation.other().is_empty() {
        rules.push(other_punctuation(symbols)?);
    }

    Ok(rules)
}

/// Several boundary rules combined into one alternation
#[derive(Clone)]
pub struct BoundaryMatcher {
    rule_names: Vec<String>,
    combined: CompiledPattern,
}

impl BoundaryMatcher {
    /// Combine rules, case-insensitively
    pub fn new(rules: &[BoundaryRule]) -> Result<Self> {
        Self::with_flags(rules, Flags::IGNORE_CASE)
    }

    /// Combine rules with explicit flags
    pub fn with_flags(rules: &[BoundaryRule], flags: Flags) -> Result<Self> {
        let patterns: Vec<CompiledPattern> = rules.iter().map(|r| r.pattern.clone()).collect();
        let mut matcher = Self::from_patterns(&patterns, flags).map_err(|e| match e {
            CoreError::InvalidPattern { pattern, reason } => CoreError::InvalidPattern {
                pattern,
                reason: format!("{reason} (combining boundary rules)"),
            },
            other => other,
        })?;
        matcher.rule_names = rules.iter().map(|r| r.name.clone()).collect();
        Ok(matcher)
    }

    /// Combine anonymous patterns
    pub fn from_patterns(patterns: &[CompiledPattern], flags: Flags) -> Result<Self> {
        if patterns.is_empty() {
            return Err(CoreError::config("boundary matcher needs at least one rule"));
        }

        let source = patterns
            .iter()
            .map(|p| p.source())
            .collect::<Vec<_>>()
            .join("|");
        let combined = CompiledPattern::new(source, flags)?;
        tracing::debug!(pattern = combined.source(), "combined boundary rules");

        Ok(Self {
            rule_names: Vec::new(),
            combined,
        })
    }

    /// Default matcher for a symbol configuration
    pub fn from_symbols(symbols: &SymbolConfig) -> Result<Self> {
        Self::new(&default_rules(symbols)?)
    }

    /// Names of the combined rules, in alternation order
    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    /// The combined pattern
    pub fn pattern(&self) -> &CompiledPattern {
        &self.combined
    }

    /// Split `text` on every boundary match
    ///
    /// Returns the pieces between matches, including empty ones; the
    /// matched text itself is discarded.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        let mut last = 0;

        for found in self.combined.regex().find_iter(text) {
            let found = found.map_err(|e| self.combined.runtime_error(e))?;
            segments.push(text[last..found.start()].to_string());
            last = found.end();
        }
        segments.push(text[last..].to_string());

        tracing::trace!(count = segments.len(), "split into segments");
        Ok(segments)
    }
}

impl fmt::Debug for BoundaryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryMatcher")
            .field("rules", &self.rule_names)
            .field("pattern", &self.combined.source())
            .finish()
    }
}

impl fmt::Display for BoundaryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from: [{}]",
            self.combined.source(),
            self.rule_names.join(", ")
        )
    }
}
