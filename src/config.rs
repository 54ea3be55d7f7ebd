//! Server configuration.
//!
//! Configuration comes from an optional `netpulse.toml` file, with
//! environment variables taking precedence over file values.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ooni::client::DEFAULT_BASE_URL;

/// Complete server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding `{id}_rolling_zscore.csv` files, also served
    /// under `/data`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// OONI API base URL (host only, no `/api/v1`)
    #[serde(default = "default_ooni_base_url")]
    pub ooni_base_url: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_ooni_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            ooni_base_url: default_ooni_base_url(),
            upstream_timeout_secs: default_upstream_timeout(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location, then apply
    /// environment overrides.
    ///
    /// Searches for `netpulse.toml` in the current directory and its
    /// parent; missing files fall back to defaults silently, while a
    /// file that exists but fails to parse is logged before falling
    /// back.
    pub fn load() -> Self {
        let mut config = Self::from_first_candidate(&[
            Path::new("netpulse.toml"),
            Path::new("../netpulse.toml"),
        ]);
        config.apply_env();
        config
    }

    fn from_first_candidate(candidates: &[&Path]) -> Self {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "config file exists but could not be parsed, using defaults"
                    );
                }
            }
        }
        Self::default()
    }

    /// Override fields from `HOST`, `PORT`, `DATA_DIR`, `OONI_BASE_URL`.
    pub fn apply_env(&mut self) {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.port = port;
        }
        if let Ok(dir) = env::var("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(url) = env::var("OONI_BASE_URL") {
            self.ooni_base_url = url;
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.ooni_base_url, "https://api.ooni.io");
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("port = 9001\n").unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_missing_candidates_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netpulse.toml");
        let config = ServerConfig::from_first_candidate(&[&path]);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_unparseable_candidate_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netpulse.toml");
        std::fs::write(&path, "port = \"not a number\"\n").unwrap();

        // Malformed file must not abort startup; defaults win.
        let config = ServerConfig::from_first_candidate(&[&path]);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_later_candidate_wins_when_first_is_bad() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "port = \"nope\"\n").unwrap();
        std::fs::write(&good, "port = 9100\n").unwrap();

        let config = ServerConfig::from_first_candidate(&[&bad, &good]);
        assert_eq!(config.port, 9100);
    }
}
