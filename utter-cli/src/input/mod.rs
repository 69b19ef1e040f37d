//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-`)
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A text read from an input source
#[derive(Debug, Clone)]
pub struct InputText {
    /// Display name of the source
    pub source: String,
    /// Raw text
    pub text: String,
}

/// Resolve `patterns` and read every matching input
pub fn read_inputs(patterns: &[String]) -> Result<Vec<InputText>> {
    resolve_patterns(patterns)?
        .into_iter()
        .map(|source| {
            let text = source.read()?;
            log::info!("Read {} ({} bytes)", source, text.len());
            Ok(InputText {
                source: source.to_string(),
                text,
            })
        })
        .collect()
}
