use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::storage::pool::DEFAULT_POOL_SIZE;

pub const DEFAULT_ADDR: &str = "localhost:4000";
pub const DEFAULT_DSN: &str = "snippetbox.db";
pub const DEFAULT_STATIC_DIR: &str = "./ui/static";

/// Contents of `snippetbox.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SnippetboxConfig {
    pub addr: Option<String>,
    pub dsn: Option<String>,
    pub pool_size: Option<u32>,
    pub static_dir: Option<String>,
}

impl SnippetboxConfig {
    /// A config with every key set to its default, as written by `init`.
    pub fn defaults() -> Self {
        Self {
            addr: Some(DEFAULT_ADDR.to_string()),
            dsn: Some(DEFAULT_DSN.to_string()),
            pool_size: Some(DEFAULT_POOL_SIZE),
            static_dir: Some(DEFAULT_STATIC_DIR.to_string()),
        }
    }

    /// Keep values set on `self`, filling the gaps from `fallback`.
    pub fn or(self, fallback: SnippetboxConfig) -> Self {
        Self {
            addr: self.addr.or(fallback.addr),
            dsn: self.dsn.or(fallback.dsn),
            pool_size: self.pool_size.or(fallback.pool_size),
            static_dir: self.static_dir.or(fallback.static_dir),
        }
    }
}

/// Fully resolved settings for `serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub addr: String,
    pub dsn: String,
    pub pool_size: u32,
    pub static_dir: PathBuf,
}

impl ServeSettings {
    /// Command-line values win over the config file, which wins over defaults.
    pub fn resolve(cli: SnippetboxConfig, file: Option<SnippetboxConfig>) -> Self {
        let merged = cli.or(file.unwrap_or_default()).or(SnippetboxConfig::defaults());
        Self {
            addr: merged.addr.unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            dsn: merged.dsn.unwrap_or_else(|| DEFAULT_DSN.to_string()),
            pool_size: merged.pool_size.unwrap_or(DEFAULT_POOL_SIZE),
            static_dir: PathBuf::from(merged.static_dir.unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("snippetbox.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SnippetboxConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SnippetboxConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SnippetboxConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Create the parent directory of a plain database path. `file:` URIs and
/// bare file names are left alone.
pub fn ensure_db_dir(dsn: &str) -> anyhow::Result<()> {
    if dsn.starts_with("file:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(dsn).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
