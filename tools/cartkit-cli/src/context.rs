//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use cartkit_cache::Cache;
use cartkit_data::FetchClient;
use cartkit_store::{CartStore, HttpProductApi, Notice};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["cartkit.toml", ".cartkit.toml", "cartkit.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        match config_path {
            Some(ref path) => tracing::debug!(path = %path.display(), "loaded config"),
            None => tracing::debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Directory the cart file lives in.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(self.base_dir(), &self.config.storage.dir)
    }

    /// HTTP client for the configured API.
    pub fn fetch_client(&self) -> FetchClient {
        let api = &self.config.api;
        let mut client = FetchClient::new().with_base_url(&api.base_url);
        if let Some(ref token) = api.token {
            client = client.with_bearer_token(token);
        }
        if let Some(ms) = api.timeout_ms {
            client = client.with_timeout(Duration::from_millis(ms));
        }
        client
    }

    /// Open the file-backed cart store. Notices go to the terminal.
    pub fn open_store(&self) -> Result<CartStore> {
        let dir = self.storage_dir();
        tracing::debug!(dir = %dir.display(), key = %self.config.storage.key, "opening cart storage");

        let cache = Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        let api = Arc::new(HttpProductApi::new(self.fetch_client()));

        let output = self.output.clone();
        CartStore::builder(cache, api.clone(), api)
            .storage_key(&self.config.storage.key)
            .notifier(move |notice: Notice| output.warn(notice.message()))
            .open()
            .context("Failed to load cart")
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
