//! Site configuration.

use crate::store::StoreBackend;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "NEON_NEXUS_CONFIG";
pub const DEFAULT_STORAGE_KEY: &str = "neon-nexus-assets-v1";
pub const DEFAULT_EXPORT_FILE: &str = "neon-nexus-assets.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub export_file_name: String,
    pub backend: StoreBackend,
    /// Defaults to the platform data directory when unset.
    pub store_path: Option<PathBuf>,
    pub carousel_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_threshold: f64,
    pub nav_breakpoint: u32,
    pub viewport_width: u32,
    pub frame_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE.to_string(),
            backend: StoreBackend::Json,
            store_path: None,
            carousel_interval_ms: 6000,
            counter_duration_ms: 1200,
            counter_threshold: 0.6,
            nav_breakpoint: 800,
            viewport_width: 1280,
            frame_interval_ms: 16,
        }
    }
}

impl SiteConfig {
    /// Loads configuration from a JSON file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: SiteConfig = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults. The CLI fills `path`
    /// from `--config` or `NEON_NEXUS_CONFIG`.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Saves the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn resolved_store_path(&self) -> PathBuf {
        match &self.store_path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("neon-nexus")
                .join(self.backend.default_file_name()),
        }
    }

    /// Never zero; a zero interval would refire the timer forever.
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms.max(1))
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = SiteConfig {
            backend: StoreBackend::Sqlite,
            store_path: Some(dir.path().join("kv.db")),
            carousel_interval_ms: 2500,
            ..SiteConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(SiteConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    // Keys left out of the file fall back to their defaults.
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "storage_key": "custom-key" }"#).unwrap();

        let config = SiteConfig::load_from_file(&path).unwrap();
        assert_eq!(config.storage_key, "custom-key");
        assert_eq!(config.counter_duration_ms, 1200);
        assert_eq!(config.backend, StoreBackend::Json);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(matches!(
            SiteConfig::load_from_file(&path),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    // A zero interval in the file is clamped to one millisecond.
    fn zero_intervals_are_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "carousel_interval_ms": 0, "frame_interval_ms": 0 }"#).unwrap();

        let config = SiteConfig::load_from_file(&path).unwrap();
        assert_eq!(config.carousel_interval(), Duration::from_millis(1));
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn resolve_without_path_uses_defaults() {
        assert_eq!(SiteConfig::resolve(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn explicit_store_path_wins() {
        let config = SiteConfig {
            store_path: Some(PathBuf::from("/tmp/vault.json")),
            ..SiteConfig::default()
        };
        assert_eq!(config.resolved_store_path(), PathBuf::from("/tmp/vault.json"));
    }

    #[test]
    fn default_store_path_follows_backend() {
        let config = SiteConfig {
            backend: StoreBackend::Sqlite,
            ..SiteConfig::default()
        };
        assert!(config.resolved_store_path().ends_with("neon-nexus/local-storage.db"));
    }
}
