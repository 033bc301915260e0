//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and
//! command-line arguments.

use randshow_core::traits::SeedableEngine;
use randshow_engines::{Lcg, Pcg32, Pcg64, SplitMix64, Xoshiro256PlusPlus};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the engine
pub const ENV_ENGINE: &str = "RANDSHOW_ENGINE";
/// Environment variable fixing the seed
pub const ENV_SEED: &str = "RANDSHOW_SEED";
/// Environment variable selecting the log level
pub const ENV_LOG_LEVEL: &str = "RANDSHOW_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine: {0}. Must be one of: lcg, pcg32, pcg64, splitmix64, xoshiro256pp")]
    InvalidEngine(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
///
/// Case-insensitive on the command line and in the environment; lowercase in
/// the TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive for `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Engines selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum EngineKind {
    #[serde(rename = "lcg")]
    Lcg,
    #[serde(rename = "pcg32")]
    Pcg32,
    #[serde(rename = "pcg64")]
    Pcg64,
    #[serde(rename = "splitmix64", alias = "splitmix")]
    SplitMix64,
    #[default]
    #[serde(rename = "xoshiro256pp", alias = "xoshiro256++", alias = "xoshiro")]
    Xoshiro256PlusPlus,
}

impl EngineKind {
    /// Every engine, in the order the uniformity check runs them
    pub const ALL: [EngineKind; 5] = [
        EngineKind::Lcg,
        EngineKind::Pcg32,
        EngineKind::Pcg64,
        EngineKind::SplitMix64,
        EngineKind::Xoshiro256PlusPlus,
    ];

    /// Identifier shared with [`SeedableEngine::NAME`]
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Lcg => Lcg::NAME,
            EngineKind::Pcg32 => Pcg32::NAME,
            EngineKind::Pcg64 => Pcg64::NAME,
            EngineKind::SplitMix64 => SplitMix64::NAME,
            EngineKind::Xoshiro256PlusPlus => Xoshiro256PlusPlus::NAME,
        }
    }
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "splitmix" => Ok(EngineKind::SplitMix64),
            "xoshiro256++" | "xoshiro" => Ok(EngineKind::Xoshiro256PlusPlus),
            name => Self::ALL
                .into_iter()
                .find(|kind| kind.name() == name)
                .ok_or_else(|| ConfigError::InvalidEngine(s.to_string())),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Engine used by every subcommand
    pub engine: EngineKind,
    /// Fixed seed; `None` seeds from system entropy
    pub seed: Option<u64>,
    /// Log level
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup(ENV_ENGINE) {
            self.engine = EngineKind::from_str(&engine)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(engine) = &cli.engine {
            self.engine = EngineKind::from_str(engine)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Engine override
    pub engine: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to at least debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    Ok(config)
}
