//! Builder configuration
//!
//! ```
//! use aingle_dataset::BuilderConfig;
//!
//! let config = BuilderConfig::from_toml_str(r#"
//!     max_workers = 4
//!     base_iri = "http://example.org/data/"
//! "#)?;
//! assert_eq!(config.max_workers, 4);
//! # Ok::<(), aingle_dataset::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`DatasetBuilder`](crate::DatasetBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Maximum number of sources loaded at once. `1` loads sequentially on
    /// the calling thread.
    pub max_workers: usize,

    /// Base IRI used when `build` is called without one
    pub base_iri: Option<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_workers: 1,
            base_iri: None,
        }
    }
}

impl BuilderConfig {
    /// Sequential loading with the given base IRI
    pub fn with_base(base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: Some(base_iri.into()),
            ..Self::default()
        }
    }

    /// Parallel loading bounded to the number of available CPUs
    pub fn parallel() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            max_workers: workers,
            ..Self::default()
        }
    }

    /// Parse from a TOML document and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read from a TOML file and validate
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reject settings the builder cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(Error::Config("max_workers must be at least 1".into()));
        }
        if let Some(base) = &self.base_iri {
            oxiri::Iri::parse(base.as_str())
                .map_err(|e| Error::Config(format!("invalid base_iri <{}>: {}", base, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.max_workers, 1);
        assert!(config.base_iri.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BuilderConfig::from_toml_str("base_iri = \"urn:base:\"").unwrap();
        assert_eq!(config.max_workers, 1);
        assert_eq!(config.base_iri.as_deref(), Some("urn:base:"));
    }

    #[test]
    fn test_rejects_zero_workers() {
        let err = BuilderConfig::from_toml_str("max_workers = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_bad_base() {
        let err = BuilderConfig::from_toml_str("base_iri = \"relative/path\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_and_file() {
        let config = BuilderConfig {
            max_workers: 3,
            base_iri: Some("http://example.org/".into()),
        };
        let text = config.to_toml().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        assert_eq!(BuilderConfig::from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_parallel_has_workers() {
        assert!(BuilderConfig::parallel().max_workers >= 1);
    }
}
