//! src/logging.rs
//! ============================================================================
//! # Logging: tracing subscriber with a rolling file sink
//!
//! The explorer usually runs inside a host that owns the terminal, so logs go
//! to a file under `log_dir` through a non-blocking `tracing-appender` writer.
//! The returned [`WorkerGuard`] must be kept alive for the whole session.

use std::{
    path::{Component, Path, PathBuf},
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt::time::ChronoLocal, layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub max_log_files: usize,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: CompactString::const_new("explorer"),
            log_level: CompactString::const_new("info"),
            max_log_files: 10,
            rotation: LogRotation::Daily,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Invalid log directory: {0}")]
    InvalidLogDirectory(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),
}

pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.config.log_level = CompactString::new(level);
        self
    }

    /// Install the global subscriber. Fails if one was already installed by
    /// this builder.
    pub fn build(self) -> Result<WorkerGuard> {
        if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
            return Err(LoggingError::AlreadyInitialized.into());
        }

        match self.install() {
            Ok(guard) => Ok(guard),
            Err(e) => {
                LOGGING_INITIALIZED.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    fn install(&self) -> Result<WorkerGuard> {
        let config = &self.config;
        validate_log_directory(&config.log_dir)?;
        setup_log_directory(&config.log_dir)?;

        let rotation = match config.rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
        };

        let file_appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(config.log_file_prefix.as_str())
            .filename_suffix("log")
            .max_log_files(config.max_log_files)
            .build(&config.log_dir)
            .context("Failed to create file appender")?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(&config.log_level, env.as_deref())?;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_timer(ChronoLocal::rfc_3339())
            .with_target(true)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `RUST_LOG` (when set and non-empty) wins over the configured level.
fn build_filter(level: &str, env: Option<&str>) -> Result<EnvFilter> {
    match env.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).context("Invalid RUST_LOG directives"),
        None => Ok(EnvFilter::default()
            .add_directive(Directive::from_str(level).context("Invalid log level in config")?)),
    }
}

fn validate_log_directory(path: &Path) -> Result<(), LoggingError> {
    if path.components().count() == 0 {
        return Err(LoggingError::InvalidLogDirectory("Empty path".to_string()));
    }

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(LoggingError::InvalidLogDirectory(
            "Path contains parent directory references".to_string(),
        ));
    }

    Ok(())
}

fn setup_log_directory(log_dir: &Path) -> Result<()> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)
            .map_err(LoggingError::from)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }
    Ok(())
}
