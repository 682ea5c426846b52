//! Client configuration for the fabric health endpoint.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Connection settings the transport layer honors when issuing queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the cluster management endpoint.
    pub endpoint: String,

    /// REST API version sent with every request.
    pub api_version: String,

    /// Per-request timeout, enforced by the transport.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:19080".to_string(),
            api_version: "6.0".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file. Missing fields take their
    /// defaults; unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ClientConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:19080");
        assert_eq!(config.api_version, "6.0");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_load_applies_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"https://cluster.internal:19080\"").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://cluster.internal:19080");
        assert_eq!(config.api_version, "6.0");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_load_rejects_invalid_toml_with_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not toml").unwrap();

        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
