//! The asset vault: a newest-first list of assets kept as one JSON array
//! under a single store key.
//!
//! Reads are best effort. A blob that is not a JSON array is logged and
//! treated as an empty collection. Single records that fail to parse are
//! hidden from views but written back untouched. Failures to write propagate.

use crate::models::{split_tags, Asset, AssetDraft, AssetKind};
use crate::store::{KeyValueStore, StoreError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Asset {0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidKind(String),
}

/// One row of a filtered view: where it sits on screen and where it lives in
/// the stored sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    pub position: usize,
    pub index: usize,
    pub asset: Asset,
}

pub struct AssetVault<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> AssetVault<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        AssetVault {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored array exactly as persisted, readable or not.
    fn load_raw(&self) -> Vec<Value> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("Error reading assets: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                log::warn!("Stored assets are not a list (found {}), ignoring", kind_of(&other));
                Vec::new()
            }
            Err(e) => {
                log::error!("Error parsing assets: {}", e);
                Vec::new()
            }
        }
    }

    /// Readable assets with their index in the stored array. Records that do
    /// not parse are skipped here but stay in the store.
    fn readable(&self) -> Vec<(usize, Asset)> {
        self.load_raw()
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value::<Asset>(item) {
                Ok(asset) => Some((i, asset)),
                Err(e) => {
                    log::warn!("Skipping unreadable asset #{}: {}", i, e);
                    None
                }
            })
            .collect()
    }

    pub fn load(&self) -> Vec<Asset> {
        self.readable().into_iter().map(|(_, asset)| asset).collect()
    }

    fn save(&mut self, items: &[Value]) -> Result<(), VaultError> {
        let json = serde_json::to_string(items)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }

    pub fn view(&self, query: &str) -> Vec<VaultEntry> {
        let needle = query.trim().to_lowercase();
        self.readable()
            .into_iter()
            .filter(|(_, asset)| asset.matches(&needle))
            .enumerate()
            .map(|(position, (index, asset))| VaultEntry {
                position,
                index,
                asset,
            })
            .collect()
    }

    pub fn list(&self, query: &str) -> Vec<Asset> {
        self.view(query).into_iter().map(|entry| entry.asset).collect()
    }

    pub fn add(&mut self, draft: &AssetDraft) -> Result<Asset, VaultError> {
        let name = draft.name.trim();
        let kind = draft.kind.trim();
        let link = draft.link.trim();

        if name.is_empty() {
            return Err(VaultError::MissingField("name"));
        }
        if kind.is_empty() {
            return Err(VaultError::MissingField("type"));
        }
        if link.is_empty() {
            return Err(VaultError::MissingField("link"));
        }
        let kind: AssetKind = kind.parse().map_err(VaultError::InvalidKind)?;

        let asset = Asset {
            name: name.to_string(),
            kind,
            link: link.to_string(),
            tags: split_tags(&draft.tags),
        };

        let mut items = self.load_raw();
        items.insert(0, serde_json::to_value(&asset)?);
        self.save(&items)?;
        log::info!("Logged asset '{}' ({} total)", asset.name, items.len());
        Ok(asset)
    }

    /// Removes the asset shown at `position` in the view filtered by `query`.
    pub fn remove_at(&mut self, position: usize, query: &str) -> Result<Option<Asset>, VaultError> {
        let Some(entry) = self.view(query).into_iter().nth(position) else {
            log::debug!("No asset at position {} for query '{}'", position, query);
            return Ok(None);
        };

        let mut items = self.load_raw();
        items.remove(entry.index);
        self.save(&items)?;
        log::info!("Removed asset '{}'", entry.asset.name);
        Ok(Some(entry.asset))
    }

    /// The full stored sequence, unreadable records included.
    pub fn export_json(&self) -> Result<String, VaultError> {
        Ok(serde_json::to_string_pretty(&self.load_raw())?)
    }

    pub fn export_to_dir(&self, dir: &Path, file_name: &str) -> Result<PathBuf, VaultError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(file_name);
        fs::write(&path, self.export_json()?)?;
        log::info!("Exported assets to {}", path.display());
        Ok(path)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
