//! Configuration loaded from `~/.rollcall/config.yaml`
//!
//! Precedence: defaults, then the YAML file, then `ROLLCALL_BASE_URL` or
//! `--base-url` (clap resolves those two, flag first).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOG_FILE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server origin; `/api/students` is appended
    pub base_url: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// `~/.rollcall/config.yaml`, or `./.rollcall/config.yaml` without a home dir
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rollcall")
            .join("config.yaml")
    }

    /// Read a config file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Load from `path` (or the default location) and apply a base URL override
    pub fn resolve(path: Option<&Path>, base_url: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Config::load_from(path)?,
            None => Config::load_from(&Config::default_path())?,
        };
        if let Some(url) = base_url {
            config.base_url = normalize_base_url(url);
        }
        Ok(config)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://records.local:9000/").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "http://records.local:9000");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_override_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://from-file:1\nlog_file: /tmp/x.log").unwrap();
        let config = Config::resolve(Some(file.path()), Some("http://from-flag:2/")).unwrap();
        assert_eq!(config.base_url, "http://from-flag:2");
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: [unclosed").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
