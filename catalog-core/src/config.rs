//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the platform config directory
//! using the [`directories`](https://docs.rs/directories) crate. A missing
//! file is created with defaults; every section falls back to its defaults
//! when absent, so a partial file is fine.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use compact_str::CompactString;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;

/// Default location of the catalog document, relative to the working directory.
pub const DEFAULT_CATALOG_SOURCE: &str = "static/data/servers.json";

/// Where the catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local file path or `http(s)://` URL of the JSON catalog
    pub source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
        }
    }
}

/// File logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log files
    pub dir: PathBuf,

    /// Default level directive; `RUST_LOG` takes precedence
    pub level: CompactString,

    pub file_prefix: CompactString,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            level: CompactString::const_new("info"),
            file_prefix: CompactString::const_new("catalog"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Open the selected entry's link in the system browser on Enter
    pub open_links: bool,

    /// Housekeeping tick (notification expiry), milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            open_links: true,
            tick_rate_ms: 250,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads config from the platform config dir, creating it with defaults
    /// when no file exists yet.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/catalog/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            Self::load_from(&path).await
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Loads config from an explicit file. Missing file is an error here.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    /// Saves config to the platform config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::config_path()?).await
    }

    /// Writes pretty TOML to `path`, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        let io_err = |source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await.map_err(io_err)?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs =
            ProjectDirs::from("org", "mcp-directory", "catalog").ok_or(AppError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.catalog.source, DEFAULT_CATALOG_SOURCE);
        assert!(cfg.ui.open_links);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let cfg = Config::from_toml(
            r#"
            [catalog]
            source = "https://example.org/servers.json"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.catalog.source, "https://example.org/servers.json");
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.file_prefix, "catalog");
        assert_eq!(cfg.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[catalog\nsource = 1").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nopen_links = false").unwrap();

        let cfg = Config::load_from(file.path()).await.unwrap();
        assert!(!cfg.ui.open_links);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
    }

    #[tokio::test]
    async fn test_load_from_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Config::load_from(&path).await.unwrap_err();
        match err {
            AppError::ConfigIo { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roundtrip_through_toml_string() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[tokio::test]
    async fn test_save_to_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.catalog.source = "https://example.org/servers.json".to_string();
        cfg.ui.tick_rate_ms = 100;
        cfg.save_to(&path).await.unwrap();

        assert_eq!(Config::load_from(&path).await.unwrap(), cfg);
    }

    #[tokio::test]
    async fn test_save_to_unwritable_path_reports_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // parent is a regular file, so the directory cannot be created
        let path = file.path().join("config.toml");

        let err = Config::default().save_to(&path).await.unwrap_err();
        assert!(matches!(err, AppError::ConfigIo { path: ref p, .. } if *p == path));
    }
}
