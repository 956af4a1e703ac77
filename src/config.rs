//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional JSON file,
//! then environment variables. Missing credentials are reported but never
//! fatal; provider calls simply fail at the token step.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::Result;
use crate::amadeus::Environment;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Travel provider settings
    #[serde(default)]
    pub amadeus: AmadeusConfig,

    /// LLM settings for the natural-language front-end
    #[serde(default)]
    pub llm: LlmConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Amadeus client-credentials and host selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmadeusConfig {
    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    /// "test" or "production"
    #[serde(default)]
    pub environment: Environment,

    /// Overrides the host derived from `environment` (proxies, tests)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl AmadeusConfig {
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// Maximum tool iterations per query
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_llm_base_url(),
            max_iterations: default_max_iterations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_max_iterations() -> usize {
    10
}

fn default_port() -> u16 {
    8000
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wayfarer")
}

/// Get the default config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from a JSON file, falling back to defaults when the
/// file does not exist.
pub fn load_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load configuration: file (explicit path or `~/.wayfarer/config.json`),
/// then process environment overrides.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    let mut config = load_file(&path)?;
    config.apply_env(|key| std::env::var(key).ok());
    config.warn_missing();
    Ok(config)
}

impl Config {
    /// Apply environment overrides using the given variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(id) = get("AMADEUS_CLIENT_ID") {
            self.amadeus.client_id = id;
        }
        if let Some(secret) = get("AMADEUS_CLIENT_SECRET") {
            self.amadeus.client_secret = secret;
        }
        if let Some(host) = get("AMADEUS_HOST") {
            self.amadeus.environment = Environment::from_flag(&host);
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.llm.api_key = key;
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.llm.model = model;
        }
        if let Some(port) = get("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }

    fn warn_missing(&self) {
        if !self.amadeus.has_credentials() {
            tracing::warn!(
                "Amadeus API keys not set. Define AMADEUS_CLIENT_ID and AMADEUS_CLIENT_SECRET."
            );
        }
        if self.llm.api_key.is_empty() {
            tracing::warn!("OpenAI API key not set. Natural-language queries are disabled.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_iterations, 10);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.amadeus.environment, Environment::Test);
        assert!(!config.amadeus.has_credentials());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"amadeus": {"client_id": "abc"}}"#).unwrap();
        assert_eq!(config.amadeus.client_id, "abc");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("AMADEUS_CLIENT_ID", "id-1"),
            ("AMADEUS_CLIENT_SECRET", "secret-1"),
            ("AMADEUS_HOST", "production"),
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "9001"),
        ]);

        let mut config = Config::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.amadeus.client_id, "id-1");
        assert_eq!(config.amadeus.client_secret, "secret-1");
        assert_eq!(config.amadeus.environment, Environment::Production);
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|k| (k == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"amadeus": {"client_id": "file-id", "environment": "production"}, "server": {"port": 8123}}"#,
        )
        .unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.amadeus.client_id, "file-id");
        assert_eq!(loaded.amadeus.environment, Environment::Production);
        assert_eq!(loaded.server.port, 8123);
        assert_eq!(loaded.llm.max_iterations, 10);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.server.port, 8000);
    }
}
