//! Configuration loading
//!
//! A configuration file is TOML. It may set parser limits and may replace
//! the standard tag and type tables:
//!
//! ```toml
//! [parser]
//! max_ifds = 64
//!
//! [types]
//! 3 = "SHORT 2"
//!
//! [tags]
//! 256 = "ImageWidth\tSHORT,LONG\t1"
//! ```
//!
//! `[tags]` and `[types]` come as a pair; supplying one without the other
//! is an error.

use std::fs;
use std::path::Path;

use log::debug;

use crate::tiff::constants::ifd;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::reader::{TiffReader, TiffReaderBuilder};
use crate::tiff::registry::Registry;

/// Parser settings and an optional replacement registry
#[derive(Debug, Clone)]
pub struct Config {
    pub max_ifds: usize,
    pub registry: Option<Registry>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_ifds: ifd::DEFAULT_MAX_IFDS,
            registry: None,
        }
    }
}

impl Config {
    /// Reads a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> TiffResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TiffError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(content: &str) -> TiffResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| TiffError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(parser) = toml_value.get("parser") {
            if let Some(max_ifds) = parser.get("max_ifds") {
                let max_ifds = max_ifds
                    .as_integer()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        TiffError::ConfigError("parser.max_ifds must be a positive integer".to_string())
                    })?;
                config.max_ifds = max_ifds as usize;
            }
        }

        let has_tags = toml_value.get("tags").is_some();
        let has_types = toml_value.get("types").is_some();
        match (has_tags, has_types) {
            (true, true) => config.registry = Some(Registry::from_toml_value(&toml_value)?),
            (false, false) => {}
            _ => {
                return Err(TiffError::ConfigError(
                    "[tags] and [types] must be given together".to_string(),
                ))
            }
        }

        Ok(config)
    }

    /// Registry to parse with: the configured one or the standard one
    pub fn registry(&self) -> &Registry {
        self.registry.as_ref().unwrap_or_else(|| Registry::standard())
    }

    /// Builds a reader borrowing this configuration
    pub fn reader(&self) -> TiffReader<'_> {
        TiffReaderBuilder::new()
            .registry(self.registry())
            .max_ifds(self.max_ifds)
            .build()
    }
}
