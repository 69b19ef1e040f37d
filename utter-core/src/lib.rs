//! Text segmentation for speech synthesis
//!
//! Turns arbitrary text into an ordered list of short tokens, each at most a
//! fixed number of characters long, cut at natural pause points so that
//! every token can be synthesised on its own.
//!
//! # Pipeline
//!
//! - **Rewrite**: a [`RewriteChain`] normalises the text (space after tone
//!   marks, re-joined end-of-line hyphens, abbreviation periods removed,
//!   word substitutions)
//! - **Split**: a [`BoundaryMatcher`] cuts on punctuation, guarded so that
//!   "10:01" or "e.g." stay whole
//! - **Pack**: [`pack`] breaks every segment into size-bounded chunks at the
//!   rightmost space
//! - **Clean**: a [`Cleaner`] drops chunks with nothing to speak
//!
//! All language data lives in a [`SymbolConfig`] loaded from TOML.
//!
//! # Example
//!
//! ```rust
//! use utter_core::Segmenter;
//!
//! let segmenter = Segmenter::new(20).unwrap();
//! let tokens = segmenter.segment("Hello! How are you? I am fine.").unwrap();
//! assert_eq!(tokens, vec!["Hello!", "How are you?", "I am fine."]);
//! ```

pub mod boundary;
pub mod cleaner;
pub mod error;
pub mod packer;
pub mod pattern;
pub mod rewrite;
pub mod segmenter;
pub mod symbols;

pub use boundary::{BoundaryMatcher, BoundaryRule};
pub use cleaner::Cleaner;
pub use error::{CoreError, Result};
pub use packer::pack;
pub use pattern::{compile_pattern, escape, CompiledPattern, Flags, Fragment, Template};
pub use rewrite::{apply_rewrite_chain, Replacement, RewriteChain, RewriteRule, RewriteStep};
pub use segmenter::{
    segment_text, Segmenter, SegmenterBuilder, DEFAULT_DELIMITER, DEFAULT_MAX_CHARS,
};
pub use symbols::{default_symbols, SymbolConfig};
