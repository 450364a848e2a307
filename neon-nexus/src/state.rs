use crate::config::SiteConfig;
use crate::store::{open_store, KeyValueStore, StoreError};
use crate::ui::PageState;
use crate::vault::AssetVault;
use chrono::Datelike;

pub struct AppState {
    pub config: SiteConfig,
    pub store: Box<dyn KeyValueStore>,
}

impl AppState {
    pub fn open(config: SiteConfig) -> Result<Self, StoreError> {
        let store = open_store(config.backend, &config.resolved_store_path())?;
        Ok(AppState { config, store })
    }

    pub fn with_store(config: SiteConfig, store: Box<dyn KeyValueStore>) -> Self {
        AppState { config, store }
    }

    pub fn vault(&mut self) -> AssetVault<&mut dyn KeyValueStore> {
        AssetVault::new(&mut *self.store, self.config.storage_key.clone())
    }

    pub fn page(&mut self) -> PageState<&mut dyn KeyValueStore> {
        let year = chrono::Local::now().year();
        let config = self.config.clone();
        PageState::new(self.vault(), &config, year)
    }
}
