use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Remote translation endpoint config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// History persistence config
    #[serde(default)]
    pub history: HistoryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Remote translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Endpoint base URL; empty means the default public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Ceiling on a single remote translation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// History persistence configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Hosted record store config; disabled when the URL is empty
    #[serde(default)]
    pub remote: RemoteStoreConfig,

    /// Records retained per user in the local fallback store
    #[serde(default = "default_local_cap")]
    pub local_cap: usize,

    /// Records shown when listing history
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            remote: RemoteStoreConfig::default(),
            local_cap: default_local_cap(),
            display_limit: default_display_limit(),
        }
    }
}

/// Hosted record store coordinates
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteStoreConfig {
    /// Project base URL; empty disables the hosted store
    #[serde(default = "String::new")]
    pub url: String,

    /// Public API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Table name holding translation records
    #[serde(default = "default_store_table")]
    pub table: String,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_store_table(),
        }
    }
}

impl RemoteStoreConfig {
    /// Whether a hosted store is configured
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            history: HistoryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration, creating a default config file when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            return Self::from_file(path);
        }

        info!("Config file not found, creating default at {:?}", path);
        let config = Config::default();
        config.save_to_file(path)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create config file: {:?}", path))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}

fn default_source_language() -> String {
    "ko".to_string()
}

fn default_target_language() -> String {
    "de".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_local_cap() -> usize {
    50
}

fn default_display_limit() -> usize {
    10
}

fn default_store_table() -> String {
    "translations".to_string()
}
