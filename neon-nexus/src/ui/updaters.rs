//! Page state update logic
//!
//! Each event touches one widget and reports the regions to re-render.

use super::events::{Region, UiEvent};
use super::state::PageState;
use crate::counter::Intersection;
use crate::models::{AssetDraft, LearningFilter};
use crate::store::KeyValueStore;
use crate::vault::VaultError;
use std::path::Path;
use std::time::Duration;

impl<S: KeyValueStore> PageState<S> {
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Vec<Region>, VaultError> {
        let regions = match event {
            UiEvent::LearningFilterChanged(value) => self.handle_learning_filter(&value),
            UiEvent::AssetSearch(query) => {
                self.asset_query = query.trim().to_string();
                vec![Region::Vault]
            }
            UiEvent::AssetSubmitted(draft) => self.handle_asset_submit(&draft)?,
            UiEvent::AssetRemoved(position) => {
                let query = self.asset_query.clone();
                self.vault.remove_at(position, &query)?;
                vec![Region::Vault]
            }
            UiEvent::AssetExport { dir } => self.handle_export(&dir)?,
            UiEvent::NavToggled => {
                self.nav.toggle();
                vec![Region::Nav]
            }
            UiEvent::NavLinkClicked => {
                if self.nav.link_clicked() {
                    vec![Region::Nav]
                } else {
                    Vec::new()
                }
            }
            UiEvent::Resized(width) => {
                self.nav.resize(width);
                vec![Region::Nav]
            }
            UiEvent::CarouselNext => {
                self.carousel.next();
                vec![Region::Testimonials]
            }
            UiEvent::CarouselPrev => {
                self.carousel.prev();
                vec![Region::Testimonials]
            }
            UiEvent::CarouselSelect(index) => {
                if self.carousel.select(index) {
                    vec![Region::Testimonials]
                } else {
                    Vec::new()
                }
            }
            UiEvent::CarouselHover(true) => {
                self.carousel.pause(&mut self.timeline);
                Vec::new()
            }
            UiEvent::CarouselHover(false) => {
                self.carousel.resume(&mut self.timeline);
                Vec::new()
            }
            UiEvent::ContactInput { field, value } => {
                self.contact.set(&field, value);
                Vec::new()
            }
            UiEvent::ContactSubmitted => {
                self.contact.submit();
                vec![Region::Contact]
            }
            UiEvent::Intersections(entries) => self.handle_intersections(&entries),
            UiEvent::Tick(elapsed) => self.handle_tick(elapsed),
        };
        Ok(regions)
    }

    fn handle_learning_filter(&mut self, value: &str) -> Vec<Region> {
        match value.parse::<LearningFilter>() {
            Ok(filter) => {
                self.learning_filter = filter;
                vec![Region::Learning]
            }
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }

    fn handle_asset_submit(&mut self, draft: &AssetDraft) -> Result<Vec<Region>, VaultError> {
        match self.vault.add(draft) {
            Ok(_) => self.asset_error = None,
            Err(e @ (VaultError::MissingField(_) | VaultError::InvalidKind(_))) => {
                self.asset_error = Some(e.to_string());
            }
            Err(e) => return Err(e),
        }
        Ok(vec![Region::Vault])
    }

    fn handle_export(&mut self, dir: &Path) -> Result<Vec<Region>, VaultError> {
        let file_name = self.export_file_name.clone();
        let path = self.vault.export_to_dir(dir, &file_name)?;
        self.last_export = Some(path);
        Ok(vec![Region::Vault])
    }

    fn handle_intersections(&mut self, entries: &[Intersection]) -> Vec<Region> {
        let now = self.timeline.now();
        if self.counters.on_intersection(entries, now).is_empty() {
            Vec::new()
        } else {
            vec![Region::Metrics]
        }
    }

    fn handle_tick(&mut self, elapsed: Duration) -> Vec<Region> {
        let mut regions = Vec::new();
        let carousel = &mut self.carousel;
        self.timeline.advance(elapsed, |timeline, token| {
            if carousel.on_timer(token, timeline) && !regions.contains(&Region::Testimonials) {
                regions.push(Region::Testimonials);
            }
        });

        if !self.counters.on_frame(self.timeline.now()).is_empty() {
            regions.push(Region::Metrics);
        }
        regions
    }
}
