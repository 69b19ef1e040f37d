//! Text rewriting applied before boundary splitting
//!
//! A [`RewriteChain`] is an ordered list of [`RewriteStep`]s. Each step
//! receives the previous step's output. The default chain is built from a
//! [`SymbolConfig`](crate::symbols::SymbolConfig):
//! tone-mark spacer, end-of-line joiner, abbreviation stripper, then the
//! substitution table.

mod rule;
pub mod steps;

pub use rule::{Replacement, RewriteRule};
pub use steps::{
    abbreviation_stripper, end_of_line_joiner, substitution_table, tone_mark_spacer,
    SubstitutionTable,
};

use crate::error::Result;
use crate::symbols::SymbolConfig;
use std::fmt;
use std::sync::Arc;

/// A pure text-to-text transformation
pub trait RewriteStep: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Transform `text`
    fn apply(&self, text: &str) -> Result<String>;
}

/// A single [`RewriteRule`] under a name
#[derive(Debug, Clone)]
pub struct RuleStep {
    name: String,
    rule: RewriteRule,
}

impl RuleStep {
    /// Name a rule
    pub fn new(name: impl Into<String>, rule: RewriteRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// The wrapped rule
    pub fn rule(&self) -> &RewriteRule {
        &self.rule
    }
}

impl RewriteStep for RuleStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, text: &str) -> Result<String> {
        self.rule.apply(text)
    }
}

/// A caller-supplied function used as a step
pub struct FnStep<F> {
    name: String,
    func: F,
}

impl<F> FnStep<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    /// Wrap a closure
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> fmt::Debug for FnStep<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStep").field("name", &self.name).finish()
    }
}

impl<F> RewriteStep for FnStep<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, text: &str) -> Result<String> {
        Ok((self.func)(text))
    }
}

/// Ordered rewrite steps
#[derive(Debug, Clone, Default)]
pub struct RewriteChain {
    steps: Vec<Arc<dyn RewriteStep>>,
}

impl RewriteChain {
    /// Empty chain; applying it returns the input unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Default chain for a symbol configuration
    ///
    /// Steps whose symbol set is empty are left out.
    pub fn from_symbols(symbols: &SymbolConfig) -> Result<Self> {
        let mut chain = Self::new();
        if !symbols.punctuation.tone_marks.is_empty() {
            chain = chain.with_step(tone_mark_spacer(&symbols.punctuation.tone_marks)?);
        }
        chain = chain.with_step(end_of_line_joiner()?);
        if !symbols.abbreviations.words.is_empty() {
            chain = chain.with_step(abbreviation_stripper(&symbols.abbreviations.words)?);
        }
        chain = chain.with_step(substitution_table(
            &symbols.substitutions.pairs,
            symbols.substitutions.ignore_case,
        )?);
        Ok(chain)
    }

    /// Append a step
    pub fn with_step<S: RewriteStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Append a shared step
    pub fn push(&mut self, step: Arc<dyn RewriteStep>) {
        self.steps.push(step);
    }

    /// Append a closure step
    pub fn with_fn<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.with_step(FnStep::new(name, func))
    }

    /// Step names in order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for step in &self.steps {
            let next = step.apply(&current)?;
            if next != current {
                tracing::trace!(step = step.name(), before = %current, after = %next, "rewrite");
            }
            current = next;
        }
        Ok(current)
    }
}

/// Apply `steps` to `text`
pub fn apply_rewrite_chain(text: &str, steps: &RewriteChain) -> Result<String> {
    steps.apply(text)
}
