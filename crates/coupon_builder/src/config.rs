//! Run configuration
//!
//! Defaults, overridden by a JSON file (`--config` or `COUPON_CONFIG_PATH`),
//! overridden by explicit command line flags.

use anyhow::{Context, Result};
use coupon_core::{Method, DEFAULT_TOP};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "COUPON_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Combine method
    pub method: Method,
    /// Seed for `simple-random`; drawn at random when unset
    pub seed: Option<u64>,
    /// Number of largest coupons in the summary
    pub top: usize,
    /// Check that the coupons expand to exactly the input
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            seed: None,
            top: DEFAULT_TOP,
            verify: false,
        }
    }
}

impl RunConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config JSON")
    }

    /// Load from `path`, else from the file named by `COUPON_CONFIG_PATH`,
    /// else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let Ok(env_path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let env_path = env_path.trim();
        if env_path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_file(Path::new(env_path))
            .with_context(|| format!("Invalid config from {CONFIG_PATH_ENV}='{env_path}'"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.method, Method::SimpleMax);
        assert_eq!(config.top, 20);
        assert_eq!(config.seed, None);
        assert!(!config.verify);
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<()> {
        let config = RunConfig::from_json(r#"{ "method": "only-max", "seed": 5 }"#)?;
        assert_eq!(config.method, Method::OnlyMax);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.top, DEFAULT_TOP);
        assert_eq!(config.resolve_seed(), 5);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_method_and_fields() {
        assert!(RunConfig::from_json(r#"{ "method": "fastest" }"#).is_err());
        assert!(RunConfig::from_json(r#"{ "metod": "simple" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{ "method": "simple", "top": 3, "verify": true }}"#)?;

        let config = RunConfig::load(Some(file.path()))?;
        assert_eq!(config.method, Method::Simple);
        assert_eq!(config.top, 3);
        assert!(config.verify);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load(Some(Path::new("/nonexistent/coupon.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
