//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product and stock API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `products/{id}` and `stock/{id}` paths hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_ms: None,
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart file, relative to the config file.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".cartkit".to_string()
}

fn default_storage_key() -> String {
    cartkit_store::default_storage_key()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Generate a default cartkit.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# cartkit configuration

[api]
base_url = "{base_url}"
# token = "..."
# timeout_ms = 5000

[storage]
dir = "{dir}"
key = "{key}"
"#,
        base_url = default_base_url(),
        dir = default_storage_dir(),
        key = default_storage_key(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.storage.dir, ".cartkit");
        assert_eq!(config.storage.key, "cartkit:cart");
        assert!(config.api.timeout_ms.is_none());
    }

    #[test]
    fn generated_config_parses_back() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, default_base_url());
        assert_eq!(config.storage.key, default_storage_key());
        assert!(config.api.token.is_none());
    }

    #[test]
    fn loads_json_and_toml_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("cartkit.json");
        std::fs::write(&json, r#"{"api":{"base_url":"http://shop","timeout_ms":250}}"#).unwrap();
        let config = CliConfig::load(&json).unwrap();
        assert_eq!(config.api.base_url, "http://shop");
        assert_eq!(config.api.timeout_ms, Some(250));

        let toml_path = dir.path().join("cartkit.toml");
        std::fs::write(&toml_path, "[storage]\ndir = \"carts\"\n").unwrap();
        let config = CliConfig::load(&toml_path).unwrap();
        assert_eq!(config.storage.dir, "carts");
        assert_eq!(config.storage.key, "cartkit:cart");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cartkit.toml");
        std::fs::write(&path, "[api\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }
}
