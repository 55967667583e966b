//! Configuration management for the facility CLI
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. the YAML file given by `--config` (optional)
//! 3. `FACILITY_*` environment variables, `__` between key segments
//!    (e.g. `FACILITY_SERVER__BASE_URL`)
//! 4. command line overrides

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use facility_api::DEFAULT_PAGE_SIZE;
use facility_client::HttpClientConfig;
use facility_client::config::DEFAULT_BASE_URL;

use crate::cli::Cli;
use crate::logging::LoggingConfig;

pub const SERVER_BASE_URL: &str = "server.base_url";
pub const SERVER_CONNECT_TIMEOUT_MS: &str = "server.connect_timeout_ms";
pub const SERVER_READ_TIMEOUT_MS: &str = "server.read_timeout_ms";
pub const AUTH_USERNAME: &str = "auth.username";
pub const AUTH_PASSWORD: &str = "auth.password";
pub const UI_PAGE_SIZE: &str = "ui.page_size";
pub const LOGGING_LEVEL: &str = "logging.level";
pub const LOGGING_DIR: &str = "logging.dir";
pub const LOGGING_CONSOLE: &str = "logging.console";

const DEFAULT_CONNECT_TIMEOUT_MS: i64 = 5000;
const DEFAULT_READ_TIMEOUT_MS: i64 = 30000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration loaded from defaults, file, environment and flags
#[derive(Clone, Debug)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default(SERVER_BASE_URL, DEFAULT_BASE_URL)?
            .set_default(SERVER_CONNECT_TIMEOUT_MS, DEFAULT_CONNECT_TIMEOUT_MS)?
            .set_default(SERVER_READ_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS)?
            .set_default(UI_PAGE_SIZE, i64::from(DEFAULT_PAGE_SIZE))?
            .set_default(LOGGING_LEVEL, "info")?
            .set_default(LOGGING_CONSOLE, true)?
            .add_source(File::from(cli.config.clone()).format(FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix("FACILITY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = &cli.base_url {
            builder = builder.set_override(SERVER_BASE_URL, v.as_str())?;
        }
        if let Some(v) = &cli.username {
            builder = builder.set_override(AUTH_USERNAME, v.as_str())?;
        }
        if let Some(v) = &cli.password {
            builder = builder.set_override(AUTH_PASSWORD, v.as_str())?;
        }

        let configuration = Configuration {
            config: builder.build()?,
        };
        configuration.page_size()?;
        Ok(configuration)
    }

    // ========================================================================
    // Server
    // ========================================================================

    pub fn base_url(&self) -> String {
        self.config
            .get_string(SERVER_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn connect_timeout_ms(&self) -> u64 {
        self.config
            .get_int(SERVER_CONNECT_TIMEOUT_MS)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS)
            .max(0) as u64
    }

    pub fn read_timeout_ms(&self) -> u64 {
        self.config
            .get_int(SERVER_READ_TIMEOUT_MS)
            .unwrap_or(DEFAULT_READ_TIMEOUT_MS)
            .max(0) as u64
    }

    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::new(&self.base_url())
            .with_timeouts(self.connect_timeout_ms(), self.read_timeout_ms())
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Configured credentials, when both parts are present
    pub fn credentials(&self) -> Option<(String, String)> {
        let username = self.config.get_string(AUTH_USERNAME).ok()?;
        let password = self.config.get_string(AUTH_PASSWORD).ok()?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some((username, password))
    }

    // ========================================================================
    // UI
    // ========================================================================

    pub fn page_size(&self) -> Result<u32, ConfigError> {
        let size = self
            .config
            .get_int(UI_PAGE_SIZE)
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE));
        u32::try_from(size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ConfigError::Invalid {
                key: UI_PAGE_SIZE,
                reason: format!("expected a positive page size, got {}", size),
            })
    }

    // ========================================================================
    // Logging
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGGING_LEVEL).ok(),
            self.config.get_bool(LOGGING_CONSOLE).unwrap_or(true),
            self.config.get_string(LOGGING_DIR).ok().map(PathBuf::from),
        )
    }
}
