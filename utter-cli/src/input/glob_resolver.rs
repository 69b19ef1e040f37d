//! Input pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;

/// Resolve `-` and file patterns into input sources
///
/// Sources keep the order of the patterns; matches of one pattern are
/// sorted. A file matched by several patterns is read once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            if seen.insert(path.clone()) {
                sources.push(InputSource::File(path));
            }
        }
    }

    if sources.is_empty() {
        return Err(CliError::NoInput.into());
    }

    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}
