//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default address of the local wallpaper service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8081";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Local service endpoint.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Image generation backend the service forwards to.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Local service endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    /// Base URL, e.g. `http://localhost:8081`.
    pub url: Option<String>,
}

/// Backend values sent with every generation request.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend host address.
    pub server: String,
    /// Backend port.
    pub port: u16,
    /// Output directory on the service host.
    pub output_dir: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            server: "10.176.33.52".to_string(),
            port: 7860,
            output_dir: "C:\\GeneratedPictures".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Resolve the service URL: explicit value (flag or `WALLGEN_SERVICE_URL`),
    /// then the config file, then the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting value is not an absolute http(s) URL.
    pub fn service_url(&self, explicit: Option<&str>) -> Result<reqwest::Url, String> {
        let raw = explicit
            .or(self.service.url.as_deref())
            .unwrap_or(DEFAULT_SERVICE_URL);
        let url = reqwest::Url::parse(raw).map_err(|e| format!("Invalid service URL '{raw}': {e}"))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(format!("Invalid service URL '{raw}': unsupported scheme '{other}'")),
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `WALLGEN_CONFIG` environment variable
/// 3. `~/.config/wallgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("WALLGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/wallgen/config.toml")
    } else {
        PathBuf::from("wallgen.toml")
    }
}
