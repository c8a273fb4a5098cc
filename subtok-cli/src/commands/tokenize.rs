//! Tokenize command implementation

use crate::config_source::ConfigSource;
use crate::error::{CliError, CliResult};
use crate::input::resolve_patterns;
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormatter, SubtokenRecord, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use subtok_core::language::{AnnotationConfig, DepthConfig, ScriptConfig};
use subtok_core::{Input, Subtokens, Tokenizer, TokenizerConfig};

/// Source name used for `--text`
pub const TEXT_SOURCE: &str = "<text>";
/// Source name used for stdin
pub const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Tokenize this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (default: built-in Latin, Cyrillic)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Register these Unicode scripts instead of the configured ones, in order
    #[arg(short, long = "script", value_name = "NAME")]
    pub scripts: Vec<String>,

    /// Metadata attached to each subtoken
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Let the window span whole words
    #[arg(long, conflicts_with = "fixed_depth")]
    pub unbounded: bool,

    /// Use the same window depth for every word
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub fixed_depth: Option<usize>,

    /// Tokenize input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One subtoken per line with its annotation
    Text,
    /// JSON array of subtokens with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Annotation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Dominant language and base span
    Language,
    /// Window depth
    Depth,
}

impl From<Mode> for AnnotationConfig {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Language => AnnotationConfig::Language,
            Mode::Depth => AnnotationConfig::Depth,
        }
    }
}

/// Text tokenized from one input
struct Tokenized {
    source: String,
    subtokens: Subtokens,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {self:?}");

        let source = ConfigSource::from_arg(self.config.as_deref());
        log::info!("Configuration: {}", source.display_name());
        let config = self.apply_overrides(source.load()?);
        let tokenizer = Tokenizer::with_config(config.to_config().map_err(CliError::from)?);

        let results = self.tokenize_inputs(&tokenizer)?;

        let registry = tokenizer.config().registry();
        let mut formatter = self.create_formatter()?;
        for result in &results {
            for (text, metadata) in &result.subtokens {
                let record = SubtokenRecord::new(text, &result.source, *metadata, registry);
                formatter.format_subtoken(&record)?;
            }
        }
        formatter.finish()?;

        log::info!("Tokenization complete");
        Ok(())
    }

    /// Layer command-line settings over the loaded configuration
    pub fn apply_overrides(&self, mut config: TokenizerConfig) -> TokenizerConfig {
        if !self.scripts.is_empty() {
            config.scripts = self.scripts.iter().map(ScriptConfig::unicode).collect();
        }
        if let Some(mode) = self.mode {
            config.output.annotation = mode.into();
        }
        if self.unbounded {
            config.depth = DepthConfig::Unbounded;
        } else if let Some(depth) = self.fixed_depth {
            config.depth = DepthConfig::Fixed { depth };
        }
        config
    }

    fn tokenize_inputs(&self, tokenizer: &Tokenizer) -> Result<Vec<Tokenized>> {
        if let Some(text) = &self.text {
            return Ok(vec![Tokenized {
                source: TEXT_SOURCE.to_string(),
                subtokens: tokenizer.tokenize(text),
            }]);
        }

        if self.input.is_empty() {
            log::info!("Reading from stdin");
            let output = tokenizer
                .process_stream(io::stdin())
                .map_err(CliError::from)?;
            return Ok(vec![Tokenized {
                source: STDIN_SOURCE.to_string(),
                subtokens: output.subtokens,
            }]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = if self.parallel {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::debug!("Using {threads} worker threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| tokenize_file(tokenizer, path, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| tokenize_file(tokenizer, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(results)
    }

    /// Create the output formatter for the selected format and destination
    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

fn tokenize_file(
    tokenizer: &Tokenizer,
    path: &Path,
    progress: &ProgressReporter,
) -> CliResult<Tokenized> {
    let output = tokenizer
        .process(Input::from_file(path))
        .map_err(CliError::from)?;
    log::debug!(
        "Tokenized {} ({} bytes, {} words) in {:?}",
        path.display(),
        output.metadata.bytes_processed,
        output.metadata.word_count,
        output.metadata.duration
    );

    let source = path.display().to_string();
    progress.file_completed(&source);

    Ok(Tokenized {
        source,
        subtokens: output.subtokens,
    })
}
