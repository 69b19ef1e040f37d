//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use utter_core::{Segmenter, SymbolConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the symbol configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub symbols: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating symbol configuration: {}", self.symbols.display());

        // Compiling the segmenter also checks every rule pattern
        let checked = SymbolConfig::from_file(&self.symbols).and_then(|symbols| {
            let segmenter = Segmenter::builder().symbols(symbols.clone()).build()?;
            Ok((symbols, segmenter))
        });

        match checked {
            Ok((symbols, segmenter)) => {
                println!("✓ Configuration is valid!");
                println!("  Name: {}", symbols.metadata.name);
                println!("  Punctuation: {}", symbols.punctuation.all.chars().count());
                println!("  Abbreviations: {}", symbols.abbreviations.words.len());
                println!("  Substitutions: {}", symbols.substitutions.pairs.len());
                println!("  Rewrite steps: {}", segmenter.chain().step_names().join(", "));
                println!(
                    "  Boundary rules: {}",
                    segmenter.matcher().rule_names().join(", ")
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
