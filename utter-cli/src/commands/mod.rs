//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod plan;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into speakable tokens
    Segment(segment::SegmentArgs),

    /// Print the TTS requests for a text
    Plan(plan::PlanArgs),

    /// Validate a symbol configuration file
    Validate(validate::ValidateArgs),

    /// Write a symbol configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in language dialects
    Languages,

    /// List available output formats
    Formats,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON
    Json,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Plan(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested list
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Built-in language dialects:");
                for (code, name) in utter_api::extra_languages() {
                    println!("  {code:<6} - {name}");
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text - One token (or request URL) per line");
                println!("  json - Structured JSON output");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // a second init (e.g. several commands in one test process) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
