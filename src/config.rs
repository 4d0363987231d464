//! Server configuration: optional TOML file plus environment
//!
//! The API key never lives in the file. It is read from the environment
//! variable named by `gemini.api_key_env` and checked at startup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::catalog::{Catalog, PRODUCTS};
use crate::manifest::MANIFEST;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub gemini: GeminiConfig,
    pub catalog: CatalogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub listen_addr: Option<String>,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: MANIFEST.model.clone(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// JSON array of product names; the embedded list is used when unset
    pub path: Option<PathBuf>,
}

/// Load the config file, or defaults when no path is given
pub fn load_server_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let Some(path) = path else {
        return Ok(ServerConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_server_config(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn parse_server_config(raw: &str) -> anyhow::Result<ServerConfig> {
    let config: ServerConfig = toml::from_str(raw)?;
    if config.gemini.model.trim().is_empty() {
        anyhow::bail!("gemini.model must not be empty");
    }
    Ok(config)
}

impl ServerConfig {
    /// Listen address: CLI flag, then `PORT`, then the file, then the default
    pub fn listen_addr(&self, cli: Option<&str>, port_env: Option<String>) -> String {
        if let Some(addr) = cli {
            return addr.to_string();
        }
        if let Some(port) = port_env.filter(|p| !p.trim().is_empty()) {
            return format!("0.0.0.0:{}", port.trim());
        }
        self.server
            .listen_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
    }

    /// Read the API key through `lookup` (normally `std::env::var`)
    pub fn resolve_api_key<F>(&self, lookup: F) -> anyhow::Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = &self.gemini.api_key_env;
        match lookup(name) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => anyhow::bail!("{} is not set in environment variables", name),
        }
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog.path else {
            return Ok(PRODUCTS.clone());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Catalog::from_json_str(&raw)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        if catalog.is_empty() {
            anyhow::bail!("catalog {} has no products", path.display());
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = load_server_config(None).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.listen_addr(None, None), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = parse_server_config(
            r#"
            [server]
            listen_addr = "0.0.0.0:8080"

            [gemini]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_addr(None, None), "0.0.0.0:8080");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_example_config_parses() {
        let config = parse_server_config(include_str!("../config/chemsafe.example.toml")).unwrap();
        assert_eq!(config.listen_addr(None, None), "127.0.0.1:3000");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!(parse_server_config("[gemini]\nmodel = \"\"\n").is_err());
    }

    #[test]
    fn test_listen_addr_precedence() {
        let config = parse_server_config("[server]\nlisten_addr = \"127.0.0.1:9000\"\n").unwrap();
        assert_eq!(config.listen_addr(Some("127.0.0.1:1"), Some("2".into())), "127.0.0.1:1");
        assert_eq!(config.listen_addr(None, Some("4000".into())), "0.0.0.0:4000");
        assert_eq!(config.listen_addr(None, Some(" ".into())), "127.0.0.1:9000");
    }

    #[test]
    fn test_api_key_required() {
        let config = ServerConfig::default();
        let err = config.resolve_api_key(|_| None).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(config.resolve_api_key(|_| Some("  ".into())).is_err());
        assert_eq!(config.resolve_api_key(|_| Some("k".into())).unwrap(), "k");
    }

    #[test]
    fn test_default_catalog() {
        let catalog = ServerConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), PRODUCTS.len());
    }

    #[test]
    fn test_missing_catalog_file() {
        let mut config = ServerConfig::default();
        config.catalog.path = Some(PathBuf::from("/nonexistent/products.json"));
        assert!(config.load_catalog().is_err());
    }
}
