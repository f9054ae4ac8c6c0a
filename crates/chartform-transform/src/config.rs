//! Engine configuration.
//!
//! Configuration is optional: every field has a default, and a TOML file only
//! needs to name the values it overrides.
//!
//! ```toml
//! default_page_size = 25
//! correlation_precision = 3
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default rows per data-table page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Default number of decimals kept for correlation coefficients.
pub const DEFAULT_CORRELATION_PRECISION: u32 = 4;

/// Largest accepted correlation precision.
pub const MAX_CORRELATION_PRECISION: u32 = 12;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed or has unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid config value for {field}: {value} ({expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings shared by all transformers built from one facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Rows per data-table page when the caller does not choose one.
    pub default_page_size: usize,
    /// Decimals kept for correlation coefficients.
    pub correlation_precision: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            correlation_precision: DEFAULT_CORRELATION_PRECISION,
        }
    }
}

impl TransformConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded transform config");
        Ok(config)
    }

    /// Set the default page size.
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Set the correlation precision.
    #[must_use]
    pub fn with_correlation_precision(mut self, precision: u32) -> Self {
        self.correlation_precision = precision;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_page_size",
                value: self.default_page_size.to_string(),
                expected: "must be at least 1",
            });
        }
        if self.correlation_precision > MAX_CORRELATION_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "correlation_precision",
                value: self.correlation_precision.to_string(),
                expected: "must be at most 12",
            });
        }
        Ok(())
    }
}
