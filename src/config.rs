//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::output::{DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory converted service orders are written to
    pub output_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(dir) = env::var("ORDERFLOW_OUTPUT_DIR") {
            config.output_dir = expand_path(&dir)?;
        }

        if let Ok(level) = env::var("ORDERFLOW_LOG") {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the output directory (CLI flag takes precedence over env).
    pub fn with_output_dir(mut self, dir: Option<&str>) -> Result<Self> {
        if let Some(dir) = dir {
            self.output_dir = expand_path(dir)?;
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.output_dir.is_file() {
            return Err(Error::config(
                format!("Output path {} is a file", self.output_dir.display()),
                "Set ORDERFLOW_OUTPUT_DIR or --output-dir to a directory",
            ));
        }
        Ok(())
    }
}

/// Expand `~` and environment variables in a configured path.
fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        Error::config(
            format!("Cannot expand path {raw:?}: {e}"),
            "Check that every $VARIABLE in the path is set",
        )
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
