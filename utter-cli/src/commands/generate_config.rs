//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use utter_core::symbols::{default_symbols, DEFAULT_SYMBOLS_TOML};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name for the new symbol set
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating symbol configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the punctuation, abbreviations and substitutions");
        println!("2. Validate your configuration:");
        println!("   utter validate -c {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   utter segment -i input.txt --symbols {}",
            self.output.display()
        );

        Ok(())
    }

    /// The default set, renamed when a name was given
    fn generate_template(&self) -> Result<String> {
        match &self.name {
            None => Ok(DEFAULT_SYMBOLS_TOML.to_string()),
            Some(name) => {
                let mut symbols = default_symbols().clone();
                symbols.metadata.name = name.clone();
                Ok(symbols.to_toml_string()?)
            }
        }
    }
}
