//! Page state.

use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::content::{METRICS, TESTIMONIALS};
use crate::counter::CounterBoard;
use crate::form::FormState;
use crate::models::LearningFilter;
use crate::navigation::NavState;
use crate::store::KeyValueStore;
use crate::timeline::Timeline;
use crate::vault::{AssetVault, VaultEntry};
use std::path::PathBuf;

/// Everything the page needs to render itself.
pub struct PageState<S> {
    /// The persisted asset list.
    pub vault: AssetVault<S>,
    /// Current value of the learning-track filter select.
    pub learning_filter: LearningFilter,
    /// Trimmed contents of the asset search box.
    pub asset_query: String,
    /// Message shown under the asset form after a rejected submit.
    pub asset_error: Option<String>,
    pub export_file_name: String,
    /// Where the last export landed.
    pub last_export: Option<PathBuf>,
    pub nav: NavState,
    pub carousel: Carousel,
    pub counters: CounterBoard,
    pub contact: FormState,
    pub timeline: Timeline,
    /// Footer year.
    pub year: i32,
}

impl<S: KeyValueStore> PageState<S> {
    /// Builds the page and starts its timers.
    pub fn new(vault: AssetVault<S>, config: &SiteConfig, year: i32) -> Self {
        let mut state = PageState {
            vault,
            learning_filter: LearningFilter::All,
            asset_query: String::new(),
            asset_error: None,
            export_file_name: config.export_file_name.clone(),
            last_export: None,
            nav: NavState::new(config.viewport_width, config.nav_breakpoint),
            carousel: Carousel::new(TESTIMONIALS.len(), config.carousel_interval()),
            counters: CounterBoard::new(
                METRICS,
                config.counter_duration(),
                config.counter_threshold,
            ),
            contact: FormState::contact(),
            timeline: Timeline::new(),
            year,
        };
        state.carousel.start(&mut state.timeline);
        state
    }

    pub fn visible_assets(&self) -> Vec<VaultEntry> {
        self.vault.view(&self.asset_query)
    }
}
