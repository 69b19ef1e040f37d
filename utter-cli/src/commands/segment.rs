//! Segment command implementation

use super::{init_logging, OutputFormat};
use crate::config::CliConfig;
use crate::input::{read_inputs, InputText};
use crate::output::{create_writer, JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use utter_core::{Segmenter, SymbolConfig};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum characters per token
    #[arg(short, long, value_name = "N", env = "UTTER_MAX_CHARS")]
    pub max_chars: Option<usize>,

    /// Symbol configuration file
    #[arg(short, long, value_name = "FILE")]
    pub symbols: Option<PathBuf>,

    /// Split on every punctuation mark
    #[arg(long)]
    pub legacy: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = self.build_segmenter(&config)?;

        let inputs: Vec<InputText> = read_inputs(&self.input)?
            .into_iter()
            .filter(|input| {
                let empty = input.text.trim().is_empty();
                if empty {
                    log::warn!("Skipping {}: no text", input.source);
                }
                !empty
            })
            .collect();

        let texts: Vec<&str> = inputs.iter().map(|input| input.text.as_str()).collect();
        let results = segmenter
            .segment_batch(&texts)
            .context("Failed to segment input")?;

        let writer = create_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let mut total = 0;
        for (input, tokens) in inputs.iter().zip(&results) {
            log::info!("{}: {} token(s)", input.source, tokens.len());
            formatter.begin_input(&input.source)?;
            for (index, token) in tokens.iter().enumerate() {
                formatter.format_token(index, token)?;
            }
            total += tokens.len();
        }
        formatter.finish()?;

        log::info!("Wrote {} token(s) from {} input(s)", total, inputs.len());
        Ok(())
    }

    fn build_segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let max_chars = self.max_chars.unwrap_or(config.segmentation.max_chars);
        let mut builder = Segmenter::builder()
            .max_size(max_chars)
            .legacy(self.legacy || config.segmentation.legacy_punctuation);

        if let Some(path) = self.symbols.as_ref().or(config.segmentation.symbols.as_ref()) {
            let symbols = SymbolConfig::from_file(path)
                .with_context(|| format!("Failed to load symbols: {}", path.display()))?;
            log::info!("Using symbol set '{}'", symbols.metadata.name);
            builder = builder.symbols(symbols);
        }

        builder.build().context("Failed to build segmenter")
    }
}
