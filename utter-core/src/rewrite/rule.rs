//! Regex substitution rules

use crate::error::{CoreError, Result};
use crate::pattern::{compile_pattern, CompiledPattern, Flags, Fragment, Template};
use std::fmt;

/// One piece of a parsed replacement
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Group1,
}

/// Replacement text with an optional reference to capture group 1
///
/// Both `\1` and `$1` refer to the first group; `\\` is a literal
/// backslash. Any other backslash escape is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    parts: Vec<Part>,
}

impl Replacement {
    /// Parse raw replacement text
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(ch) = chars.next() {
            let group_ref = match ch {
                '\\' => match chars.next() {
                    Some('1') => true,
                    Some('\\') => {
                        literal.push('\\');
                        false
                    }
                    Some(other) => {
                        return Err(CoreError::config(format!(
                            "unsupported escape '\\{other}' in replacement '{raw}'"
                        )))
                    }
                    None => {
                        return Err(CoreError::config(format!(
                            "trailing backslash in replacement '{raw}'"
                        )))
                    }
                },
                '$' if chars.peek() == Some(&'1') => {
                    chars.next();
                    true
                }
                _ => {
                    literal.push(ch);
                    false
                }
            };

            if group_ref {
                if !literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut literal)));
                }
                parts.push(Part::Group1);
            }
        }

        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self { parts })
    }

    /// Whether the replacement inserts capture group 1
    pub fn uses_group(&self) -> bool {
        self.parts.contains(&Part::Group1)
    }

    fn expand(&self, group: &str, out: &mut String) {
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Group1 => out.push_str(group),
            }
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Literal(text) => f.write_str(text)?,
                Part::Group1 => f.write_str("$1")?,
            }
        }
        Ok(())
    }
}

/// Several patterns sharing one replacement
///
/// Each pattern is built from one fragment and they run one after the
/// other, so a later pattern sees the output of the earlier ones:
///
/// ```rust
/// use utter_core::pattern::{Flags, Fragment, Template};
/// use utter_core::rewrite::RewriteRule;
///
/// let rule = RewriteRule::new(
///     &Fragment::words(["lorem", "ipsum"]),
///     &Template::Group,
///     r"\1!",
///     Flags::IGNORE_CASE,
/// )
/// .unwrap();
/// assert_eq!(rule.apply("LOREM ipSuM").unwrap(), "LOREM! ipSuM!");
/// ```
#[derive(Debug, Clone)]
pub struct RewriteRule {
    patterns: Vec<CompiledPattern>,
    replacement: Replacement,
}

impl RewriteRule {
    /// Compile one pattern per fragment, all sharing `replacement`
    pub fn new(
        fragments: &[Fragment],
        template: &Template,
        replacement: &str,
        flags: Flags,
    ) -> Result<Self> {
        let replacement = Replacement::parse(replacement)?;
        let patterns = fragments
            .iter()
            .map(|fragment| compile_pattern(std::slice::from_ref(fragment), template, flags))
            .collect::<Result<Vec<_>>>()?;

        Self::from_patterns(patterns, replacement)
    }

    /// Wrap already compiled patterns
    pub fn from_patterns(patterns: Vec<CompiledPattern>, replacement: Replacement) -> Result<Self> {
        if patterns.is_empty() {
            return Err(CoreError::config("rewrite rule needs at least one pattern"));
        }

        if replacement.uses_group() {
            if let Some(pattern) = patterns.iter().find(|p| p.captures_len() < 2) {
                return Err(CoreError::config(format!(
                    "replacement '{replacement}' refers to group 1 but '{}' has no group",
                    pattern.source()
                )));
            }
        }

        Ok(Self {
            patterns,
            replacement,
        })
    }

    /// Compiled patterns, in application order
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Shared replacement
    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Apply every pattern in turn
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for pattern in &self.patterns {
            current = self.substitute(pattern, &current)?;
        }
        Ok(current)
    }

    fn substitute(&self, pattern: &CompiledPattern, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in pattern.regex().captures_iter(text) {
            let caps = caps.map_err(|e| pattern.runtime_error(e))?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let group = caps.get(1).map_or("", |m| m.as_str());

            out.push_str(&text[last..whole.start()]);
            self.replacement.expand(group, &mut out);
            last = whole.end();
        }

        out.push_str(&text[last..]);
        Ok(out)
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .patterns
            .iter()
            .map(|p| format!("({}, repl='{}')", p.source(), self.replacement))
            .collect();
        f.write_str(&pairs.join(", "))
    }
}
