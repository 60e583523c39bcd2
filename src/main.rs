// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use dolmetscher::app_config::{Config, LogLevel};
use dolmetscher::app_controller::Controller;
use dolmetscher::resolver::TranslationOutcome;
use dolmetscher::storage::StorageConnection;

/// CLI wrapper for LogLevel to implement ValueEnum
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
    /// Translate a phrase (default command)
    Translate(TranslateArgs),

    /// Show this device's translation history, most-recent first
    History(HistoryArgs),
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language code (e.g. 'de', 'ko')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'de', 'ko')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Swap the configured translation direction
    #[arg(long)]
    swap: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct HistoryArgs {
    /// Maximum number of records to show
    #[arg(long)]
    limit: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// dolmetscher - German–Korean phrase translator
///
/// Resolves phrases through a curated dictionary first and a remote
/// translation endpoint on a miss, recording history remote-first with a
/// local fallback.
#[derive(Parser, Debug)]
#[command(name = "dolmetscher")]
#[command(version = "1.0.0")]
#[command(about = "German–Korean phrase translator")]
#[command(long_about = "dolmetscher resolves phrases through a curated dictionary first and a \
remote translation endpoint on a dictionary miss, recording every translation \
remote-first with a durable local fallback.

EXAMPLES:
    dolmetscher translate \"Hallo\" -s de -t ko   # Translate German to Korean
    dolmetscher translate \"감사합니다\" --swap      # Reverse the configured direction
    dolmetscher history --limit 5                # Show the last 5 translations

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Source language code (e.g. 'de', 'ko')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'de', 'ko')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Swap the configured translation direction
    #[arg(long)]
    swap: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

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

    // @returns: ANSI color code for log level
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
                "{}{} {:5} {}\x1B[0m",
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
    // Initialize the logger once with info level by default; the level is
    // raised or lowered after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Translate(args)) => run_translate(args).await,
        Some(Commands::History(args)) => run_history(args).await,
        None => {
            // Default behavior - use top-level args
            let text = cli
                .text
                .ok_or_else(|| anyhow!("TEXT is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                text,
                source_language: cli.source_language,
                target_language: cli.target_language,
                swap: cli.swap,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };

            run_translate(translate_args).await
        }
    }
}

/// Load config, apply CLI overrides, and set the effective log level
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::load_or_create(config_path)?;

    if let Some(level) = log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

/// Build the controller over the default local database
fn build_controller(config: &Config) -> Result<Controller> {
    let db = StorageConnection::new_default()?;
    Controller::initialize(config, db)
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let mut config = load_config(&args.config_path, args.log_level)?;

    if let Some(source) = args.source_language {
        config.source_language = source;
    }
    if let Some(target) = args.target_language {
        config.target_language = target;
    }

    let controller = build_controller(&config)?;

    if args.swap {
        controller.swap_languages();
    }

    let Some(report) = controller.translate_text(&args.text).await else {
        // Single-shot invocation, nothing can be in flight
        return Err(anyhow!("Translation request was rejected"));
    };

    match report.outcome {
        Some(TranslationOutcome::Translated(translation)) => {
            println!("{}", translation);
            Ok(())
        }
        _ => {
            eprintln!("{}", report.notification.message);
            Ok(())
        }
    }
}

async fn run_history(args: HistoryArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = build_controller(&config)?;

    let records = controller.history(args.limit).await;

    if records.is_empty() {
        println!("No translation history.");
        return Ok(());
    }

    for record in records {
        println!(
            "[{}] {} -> {}: {} => {}",
            record.created_at,
            record.source_language,
            record.target_language,
            record.original_text,
            record.translated_text
        );
    }

    Ok(())
}
