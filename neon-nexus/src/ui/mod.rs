//! Page state, event handling and HTML rendering.
//!
//! State flows one way: an [`events::UiEvent`] mutates [`state::PageState`],
//! the update reports which [`events::Region`]s changed, and
//! [`renderer::render_region`] rebuilds just those fragments.

pub mod components;
pub mod events;
pub mod renderer;
pub mod state;
pub mod updaters;

pub use events::{Region, UiEvent};
pub use renderer::{render_page, render_region};
pub use state::PageState;
