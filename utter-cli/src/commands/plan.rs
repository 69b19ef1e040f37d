//! Plan command implementation
//!
//! Prints the TTS requests a text would need without sending them.

use super::{init_logging, OutputFormat};
use crate::input::read_inputs;
use crate::output::create_writer;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use utter_api::{
    Config, LanguageMap, Speech, StaticLanguages, TkkTokenProvider, TokenKey, TTS_URL,
};
use utter_core::SymbolConfig;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Input file or pattern (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Token key, `<hours>.<offset>`
    #[arg(long, value_name = "KEY", env = "UTTER_TKK", conflicts_with = "tkk_page")]
    pub tkk: Option<String>,

    /// Saved translate page to read the token key from
    #[arg(long, value_name = "FILE")]
    pub tkk_page: Option<PathBuf>,

    /// Language code
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Read slowly
    #[arg(long)]
    pub slow: bool,

    /// Do not check the language against the language list
    #[arg(long)]
    pub no_lang_check: bool,

    /// JSON map of supported language codes to names
    #[arg(long, value_name = "FILE")]
    pub languages: Option<PathBuf>,

    /// Maximum characters per request
    #[arg(short, long, value_name = "N", default_value_t = utter_core::DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Symbol configuration file
    #[arg(short, long, value_name = "FILE")]
    pub symbols: Option<PathBuf>,

    /// Split on every punctuation mark
    #[arg(long)]
    pub legacy: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let provider = TkkTokenProvider::new(self.token_key()?);
        let config = self.build_config()?;
        let languages = self.load_languages()?;

        let mut writer = create_writer(self.output.as_deref())?;
        for input in read_inputs(std::slice::from_ref(&self.input))? {
            let speech = Speech::new(input.text, config.clone())
                .with_context(|| format!("Cannot read {}", input.source))?;

            match &languages {
                Some(languages) => speech.check_language(languages)?,
                None if config.lang_check => {
                    log::warn!("No language list given, skipping the check for '{}'", self.lang)
                }
                None => {}
            }

            let requests = speech
                .requests(&provider)
                .with_context(|| format!("Cannot plan {}", input.source))?;
            log::info!("{}: {} request(s)", input.source, requests.len());

            for request in &requests {
                match self.format {
                    OutputFormat::Text => writeln!(writer, "{}", request.to_url(TTS_URL))?,
                    OutputFormat::Json => writeln!(writer, "{}", request.to_json()?)?,
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn token_key(&self) -> Result<TokenKey> {
        match (&self.tkk, &self.tkk_page) {
            (Some(key), _) => Ok(TokenKey::parse(key)?),
            (None, Some(path)) => {
                let page = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read page: {}", path.display()))?;
                TokenKey::from_page(&page)
                    .with_context(|| format!("No token key in {}", path.display()))
            }
            (None, None) => bail!("one of --tkk or --tkk-page is required"),
        }
    }

    fn build_config(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .lang(self.lang.as_str())
            .slow(self.slow)
            .lang_check(!self.no_lang_check)
            .max_chars(self.max_chars)
            .legacy_punctuation(self.legacy);
        if let Some(path) = &self.symbols {
            let symbols = SymbolConfig::from_file(path)
                .with_context(|| format!("Failed to load symbols: {}", path.display()))?;
            builder = builder.symbols(symbols);
        }
        Ok(builder.build()?)
    }

    fn load_languages(&self) -> Result<Option<StaticLanguages>> {
        self.languages
            .as_deref()
            .map(load_language_file)
            .transpose()
    }
}

fn load_language_file(path: &Path) -> Result<StaticLanguages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language list: {}", path.display()))?;
    let languages: LanguageMap = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse language list: {}", path.display()))?;
    Ok(StaticLanguages::new(languages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(input: PathBuf, output: PathBuf) -> PlanArgs {
        PlanArgs {
            input: input.display().to_string(),
            tkk: Some("406986.2817744745".to_string()),
            tkk_page: None,
            lang: "en".to_string(),
            slow: false,
            no_lang_check: false,
            languages: None,
            max_chars: 100,
            symbols: None,
            legacy: false,
            format: OutputFormat::Text,
            output: Some(output),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_plan_single_url() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Hello").unwrap();

        args(input, output.clone()).execute().unwrap();
        let content = fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(TTS_URL));
        assert!(lines[0].contains("q=Hello"));
        assert!(lines[0].contains("tk=653601.1035499"));
    }

    #[test]
    fn test_unsupported_language() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let languages = temp_dir.path().join("languages.json");
        fs::write(&input, "Hello").unwrap();
        fs::write(&languages, r#"{"en": "English"}"#).unwrap();

        let mut args = args(input, temp_dir.path().join("out.txt"));
        args.lang = "xx".to_string();
        args.languages = Some(languages);
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args(temp_dir.path().join("in.txt"), temp_dir.path().join("o"));
        args.tkk = None;
        assert!(args.execute().is_err());
    }
}
