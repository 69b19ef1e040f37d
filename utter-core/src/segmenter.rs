//! Text-to-token pipeline
//!
//! Trims the input, applies the rewrite chain, splits on boundary rules,
//! packs every segment to the size limit and finally drops noise tokens.
//! Short inputs skip splitting and packing entirely.

use crate::boundary::{legacy_all_punctuation, BoundaryMatcher};
use crate::cleaner::Cleaner;
use crate::error::{CoreError, Result};
use crate::packer::pack;
use crate::rewrite::RewriteChain;
use crate::symbols::{default_symbols, SymbolConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default maximum token length, in characters
pub const DEFAULT_MAX_CHARS: usize = 100;

/// Default packing delimiter
pub const DEFAULT_DELIMITER: &str = " ";

/// Configured segmentation pipeline
///
/// Holds only compiled, immutable rules; a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    chain: RewriteChain,
    matcher: BoundaryMatcher,
    cleaner: Cleaner,
    max_size: usize,
    delimiter: String,
}

impl Segmenter {
    /// Default rules with a custom size limit
    pub fn new(max_size: usize) -> Result<Self> {
        Self::builder().max_size(max_size).build()
    }

    /// Start configuring a segmenter
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// Maximum token length, in characters
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Packing delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Rewrite steps applied before splitting
    pub fn chain(&self) -> &RewriteChain {
        &self.chain
    }

    /// Boundary matcher used for splitting
    pub fn matcher(&self) -> &BoundaryMatcher {
        &self.matcher
    }

    /// Cut `text` into speakable tokens of at most `max_size` characters
    ///
    /// Fails with [`CoreError::EmptyInput`] when the trimmed text is empty.
    /// Text that rewrites to nothing but punctuation yields an empty list.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        run_pipeline(
            text,
            self.max_size,
            &self.delimiter,
            &self.chain,
            &self.matcher,
            &self.cleaner,
        )
    }

    /// Segment many texts; output order follows input order
    #[cfg(feature = "parallel")]
    pub fn segment_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<String>>> {
        texts
            .par_iter()
            .map(|text| self.segment(text.as_ref()))
            .collect()
    }

    /// Segment many texts; output order follows input order
    #[cfg(not(feature = "parallel"))]
    pub fn segment_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<String>>> {
        texts.iter().map(|text| self.segment(text.as_ref())).collect()
    }
}

/// Builder for [`Segmenter`]
#[derive(Debug, Clone)]
pub struct SegmenterBuilder {
    max_size: usize,
    delimiter: String,
    symbols: Option<SymbolConfig>,
    chain: Option<RewriteChain>,
    matcher: Option<BoundaryMatcher>,
    legacy: bool,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmenterBuilder {
    /// Defaults: 100 characters, space delimiter, embedded symbol set
    pub fn new() -> Self {
        Self {
            max_size: DEFAULT_MAX_CHARS,
            delimiter: DEFAULT_DELIMITER.to_string(),
            symbols: None,
            chain: None,
            matcher: None,
            legacy: false,
        }
    }

    /// Maximum token length, in characters (must be at least 1)
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Delimiter the packer prefers to cut at
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Symbol set for the default rules and the cleaner
    pub fn symbols(mut self, symbols: SymbolConfig) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Replace the default rewrite chain
    pub fn chain(mut self, chain: RewriteChain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Replace the default boundary matcher
    pub fn matcher(mut self, matcher: BoundaryMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Split on every punctuation character, without the guarded rules
    ///
    /// Ignored when a matcher is supplied explicitly.
    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Compile the rules
    pub fn build(self) -> Result<Segmenter> {
        if self.max_size == 0 {
            return Err(CoreError::config("max_size must be at least 1"));
        }

        let symbols = match self.symbols {
            Some(symbols) => {
                symbols.validate()?;
                symbols
            }
            None => default_symbols().clone(),
        };

        let chain = match self.chain {
            Some(chain) => chain,
            None => RewriteChain::from_symbols(&symbols)?,
        };
        let matcher = match self.matcher {
            Some(matcher) => matcher,
            None if self.legacy => {
                BoundaryMatcher::new(&[legacy_all_punctuation(&symbols.punctuation.all)?])?
            }
            None => BoundaryMatcher::from_symbols(&symbols)?,
        };
        let cleaner = Cleaner::from_symbols(&symbols)?;

        tracing::debug!(
            max_size = self.max_size,
            symbols = %symbols.metadata.name,
            steps = ?chain.step_names(),
            rules = ?matcher.rule_names(),
            "built segmenter"
        );

        Ok(Segmenter {
            chain,
            matcher,
            cleaner,
            max_size: self.max_size,
            delimiter: self.delimiter,
        })
    }
}

/// Segment `text` with caller-supplied rewrite, boundary and noise rules
///
/// `cleaner` should cover the punctuation the boundary rules split on, so
/// pieces left holding only that punctuation are dropped.
pub fn segment_text(
    text: &str,
    max_size: usize,
    rewrite_steps: &RewriteChain,
    boundaries: &BoundaryMatcher,
    cleaner: &Cleaner,
) -> Result<Vec<String>> {
    if max_size == 0 {
        return Err(CoreError::config("max_size must be at least 1"));
    }
    run_pipeline(
        text,
        max_size,
        DEFAULT_DELIMITER,
        rewrite_steps,
        boundaries,
        cleaner,
    )
}

fn run_pipeline(
    text: &str,
    max_size: usize,
    delimiter: &str,
    chain: &RewriteChain,
    matcher: &BoundaryMatcher,
    cleaner: &Cleaner,
) -> Result<Vec<String>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let rewritten = chain.apply(trimmed)?;
    if rewritten.chars().count() <= max_size {
        return Ok(cleaner.clean(&[rewritten]));
    }

    let segments = matcher.split(&rewritten)?;
    tracing::debug!(segments = segments.len(), "split rewritten text");

    let chunks: Vec<String> = segments
        .iter()
        .flat_map(|segment| pack(segment, delimiter, max_size))
        .collect();
    Ok(cleaner.clean(&chunks))
}
