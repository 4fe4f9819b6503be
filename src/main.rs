// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use lineconv::app_config::{Config, LogLevel};
use lineconv::app_controller::Controller;

/// Input file used when no filename arguments are given
const DEFAULT_INPUT_FILE: &str = "text.txt";

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for lineconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lineconv - culture-aware line-by-line text file converter
///
/// Reads each input file line by line, interprets every line as a date/time,
/// a floating-point number or a char-index instruction, and writes the
/// normalized, length-prefixed results to `<file>.out`.
#[derive(Parser, Debug)]
#[command(name = "lineconv")]
#[command(version = "1.0.0")]
#[command(about = "Culture-aware line-by-line text file converter")]
#[command(long_about = "lineconv converts plain-text files line by line. Each non-empty line is
recognized as a date/time, a floating-point number or a char-index
instruction, normalized to an invariant form and prefixed with its own
character length. Files are converted concurrently and independently.

EXAMPLES:
    lineconv                                # Convert text.txt using conf.json
    lineconv notes.txt data.txt             # Convert several files concurrently
    lineconv -s fr-FR data.txt              # Parse numbers and dates as French
    lineconv -v --log-level debug data.txt  # Verbose run with debug logging
    lineconv completions bash > lineconv.bash  # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json by default. A missing or malformed
    settings file falls back to the defaults (en-US culture, not verbose).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text files to convert (defaults to text.txt)
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Source culture used for parsing, e.g. 'en-US', 'fr-FR' (overrides config)
    #[arg(short, long)]
    source_culture: Option<String>,

    /// Log each processed file and its culture (overrides config)
    #[arg(short, long)]
    verbose: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color prefix for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "lineconv", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    // Load configuration, falling back to defaults on a missing or
    // malformed settings file
    let mut config = Config::load_or_default(&cli.config_path);

    // Override config with CLI options if provided
    if let Some(culture) = &cli.source_culture {
        config.source_culture_name = culture.clone();
    }
    if cli.verbose {
        config.verbose = true;
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        // Just update the max level without reinitializing the logger
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    let filenames = if cli.files.is_empty() {
        vec![DEFAULT_INPUT_FILE.to_string()]
    } else {
        cli.files
    };

    let controller = Controller::with_config(config)?;
    controller.run(&filenames).await
}
