//! Configuration and constants for the CLI.
//!
//! Settings come from an optional TOML file; command-line flags and
//! environment variables override individual values in main.rs.
//!
//! ```toml
//! share_url = "https://flames.example.app"
//! log_file = "artifacts/calculations.jsonl"
//!
//! [backend]
//! url = "https://project.supabase.co"
//! api_key = "..."
//! table = "flames_calculations"
//! timeout_secs = 10
//!
//! [restricted]
//! list_a = ["fayiz"]
//! list_b = ["farhana"]
//! ```

use crate::policy::RestrictedPairPolicy;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for backend requests
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Current result report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Table that calculations are appended to
pub const DEFAULT_TABLE: &str = "flames_calculations";

/// Environment variables read by the CLI
pub const BACKEND_URL_ENV: &str = "FLAMES_BACKEND_URL";
pub const API_KEY_ENV: &str = "FLAMES_API_KEY";

/// Top-level config file contents
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Remote table settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Local append-only calculation log (optional)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Link appended to share messages (optional)
    #[serde(default)]
    pub share_url: Option<String>,

    /// Restricted-pair lists
    #[serde(default)]
    pub restricted: RestrictedPairPolicy,
}

/// Remote backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the backend; persistence is off when unset
    #[serde(default)]
    pub url: Option<String>,

    /// Public API key sent with each insert
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_BACKEND_TIMEOUT.as_secs()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse config from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load config from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}
