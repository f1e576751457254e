// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context, anyhow};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, TranslationProvider};
use crate::app_controller::Controller;
use crate::file_utils::FileManager;
use crate::providers::mock::MockProvider;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod message_tree;
mod providers;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Deepl,
    Google,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Deepl => TranslationProvider::DeepL,
            CliTranslationProvider::Google => TranslationProvider::Google,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate translated message bundles (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for i18n-bundler
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Locales to translate; defaults to every locale the provider supports
    #[arg(value_name = "LOCALES")]
    locales: Vec<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Directory holding the message bundles
    #[arg(short, long)]
    messages_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Use the identity mock provider instead of the network
    #[arg(long)]
    dry_run: bool,
}

/// i18n-bundler - message bundle translation tool
///
/// Reads the base-language bundle and writes one translated, structurally
/// identical bundle per target locale via DeepL or Google Translate.
#[derive(Parser, Debug)]
#[command(name = "i18n-bundler")]
#[command(version = "1.0.0")]
#[command(about = "Batch translator for JSON message bundles")]
#[command(long_about = "i18n-bundler reads the base-language message bundle and produces one
translated bundle per target locale, preserving the document shape exactly.

EXAMPLES:
    i18n-bundler                                # All locales the provider supports
    i18n-bundler uk de fr                       # Only the named locales
    i18n-bundler -p google zh be                # Use Google Translate
    i18n-bundler --dry-run                      # No network, identity translations
    i18n-bundler completions bash > bundler.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file
    doesn't exist, a default one is created automatically. API keys can
    come from the config file or from DEEPL_API_KEY /
    GOOGLE_TRANSLATE_API_KEY.

SUPPORTED PROVIDERS:
    deepl     - DeepL API (12 of the site's locales)
    google    - Google Cloud Translation v2 (all 19 locales)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Locales to translate; defaults to every locale the provider supports
    #[arg(value_name = "LOCALES")]
    locales: Vec<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g. 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Directory holding the message bundles
    #[arg(short, long)]
    messages_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Use the identity mock provider instead of the network
    #[arg(long)]
    dry_run: bool,
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color, now, record.level(), record.args()
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

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "i18n-bundler", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let translate_args = TranslateArgs {
                locales: cli.locales,
                provider: cli.provider,
                source_language: cli.source_language,
                messages_dir: cli.messages_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
                dry_run: cli.dry_run,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if FileManager::file_exists(config_path) {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(source_language) = &options.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(messages_dir) = &options.messages_dir {
        config.messages_dir = messages_dir.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    for locale in &options.locales {
        language_utils::validate_locale_code(locale)
            .map_err(|e| anyhow!("Invalid locale argument: {}", e))?;
    }

    // Create controller; a dry run swaps in the identity mock provider
    let controller = if options.dry_run {
        let mock = MockProvider::new()
            .with_locales(language_utils::SITE_LOCALES.iter().map(|code| (*code, *code)).collect());
        Controller::with_provider(config, Arc::new(mock))
    } else {
        Controller::with_config(config).map_err(|e| anyhow!(e.to_string()))?
    };

    let report = controller.run_batch(&options.locales).await;
    controller.log_summary(&report);

    if !report.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
