//! Logging setup for the facility CLI.
//!
//! Console output goes to stderr so command output on stdout stays clean.
//! When a log directory is configured, all events are also written to a
//! daily rolling `facility.log` through a non-blocking writer.
//!
//! Environment overrides: `FACILITY_LOG_LEVEL`, `FACILITY_LOG_DIR`,
//! `FACILITY_LOG_CONSOLE`. `RUST_LOG`, when set, replaces the level filter.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub const LOG_FILE_NAME: &str = "facility.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    /// Write events to stderr
    pub console_output: bool,
    /// Directory for `facility.log`; no file logging when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            console_output: true,
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Create from application configuration, then apply environment overrides
    pub fn from_config(level: Option<String>, console_output: bool, log_dir: Option<PathBuf>) -> Self {
        let config = Self {
            level: level.and_then(|v| v.parse().ok()).unwrap_or(Level::INFO),
            console_output,
            log_dir,
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `FACILITY_LOG_*` overrides from `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup("FACILITY_LOG_LEVEL").and_then(|v| v.parse().ok()) {
            self.level = level;
        }
        if let Some(dir) = lookup("FACILITY_LOG_DIR").filter(|v| !v.is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(console) = lookup("FACILITY_LOG_CONSOLE") {
            self.console_output = console.to_lowercase() != "false" && console != "0";
        }
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }
}

/// Keeps the file writer alive; dropping it flushes buffered output
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(config.filter());
        layers.push(Box::new(console_layer));
    }

    let mut file_guard = None;
    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;
        let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_names(true)
            .with_ansi(false)
            .with_filter(config.filter());
        layers.push(Box::new(file_layer));
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if let Some(log_dir) = &config.log_dir {
        tracing::debug!(log_dir = %log_dir.display(), "File logging initialized");
    }

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
