use crate::counter::Intersection;
use crate::models::AssetDraft;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the host can report to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    LearningFilterChanged(String),
    AssetSearch(String),
    AssetSubmitted(AssetDraft),
    AssetRemoved(usize),
    AssetExport { dir: PathBuf },
    NavToggled,
    NavLinkClicked,
    Resized(u32),
    CarouselNext,
    CarouselPrev,
    CarouselSelect(usize),
    CarouselHover(bool),
    ContactInput { field: String, value: String },
    ContactSubmitted,
    Intersections(Vec<Intersection>),
    /// Host time moved forward; fires timers and paints one frame.
    Tick(Duration),
}

/// A re-renderable part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Nav,
    Metrics,
    Blog,
    Learning,
    Portfolio,
    Testimonials,
    Contact,
    Vault,
    Footer,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::Nav,
        Region::Metrics,
        Region::Blog,
        Region::Learning,
        Region::Portfolio,
        Region::Testimonials,
        Region::Contact,
        Region::Vault,
        Region::Footer,
    ];

    /// Id of the element whose contents the region replaces.
    pub fn container_id(&self) -> &'static str {
        match self {
            Region::Nav => "site-nav",
            Region::Metrics => "metrics",
            Region::Blog => "blog-list",
            Region::Learning => "learning-list",
            Region::Portfolio => "portfolio-list",
            Region::Testimonials => "testimonial-carousel",
            Region::Contact => "contact-form",
            Region::Vault => "asset-vault",
            Region::Footer => "site-footer",
        }
    }
}
