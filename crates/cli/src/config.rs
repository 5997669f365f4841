//! # CLI Configuration Module
//!
//! This module loads the settings of the `canteen` command from environment
//! variables, falling back to defaults when a variable is unset.
//!
//! ## Environment Variables
//!
//! - `CANTEEN_DATA_DIR`: Directory holding the JSON store (default: "./canteen-data")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `CANTEEN_UPLOAD_DELAY_MS`: Latency of the simulated image upload in milliseconds (default: 1000)

use eyre::{Result, WrapErr};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_DATA_DIR: &str = "./canteen-data";
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 1000;

/// Configuration for the canteen command line
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use canteen_cli::config::CliConfig;
///
/// fn example() -> Result<()> {
///     let config = CliConfig::from_env()?;
///     println!("Reading canteens from {}", config.data_dir.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory of the file store
    pub data_dir: PathBuf,

    /// Log level for the application
    pub log_level: Level,

    /// How long a simulated image upload takes
    pub upload_delay: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: Level::INFO,
            upload_delay: Duration::from_millis(DEFAULT_UPLOAD_DELAY_MS),
        }
    }
}

impl CliConfig {
    /// Creates a new CliConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `CANTEEN_UPLOAD_DELAY_MS` is set but is not a whole
    /// number of milliseconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Storage settings
        let data_dir = lookup("CANTEEN_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Upload settings
        let upload_delay = match lookup("CANTEEN_UPLOAD_DELAY_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .wrap_err("Invalid CANTEEN_UPLOAD_DELAY_MS value")?,
            ),
            None => Duration::from_millis(DEFAULT_UPLOAD_DELAY_MS),
        };

        Ok(Self {
            data_dir,
            log_level,
            upload_delay,
        })
    }
}
