//! Page main renderer

use super::components::{blog, contact, footer, learning, metrics, nav, portfolio, testimonials, vault};
use super::events::Region;
use super::state::PageState;
use crate::content::{BLOG_POSTS, METRICS, PORTFOLIO_ITEMS, TESTIMONIALS};
use crate::store::KeyValueStore;
use maud::{html, Markup, DOCTYPE};

/// Inner markup of one region's container.
pub fn render_region<S: KeyValueStore>(state: &PageState<S>, region: Region) -> Markup {
    match region {
        Region::Nav => nav::render_nav(&state.nav),
        Region::Metrics => metrics::render_metrics(METRICS, &state.counters),
        Region::Blog => blog::render_blog_posts(BLOG_POSTS),
        Region::Learning => learning::render_learning_tracks(state.learning_filter),
        Region::Portfolio => portfolio::render_portfolio(PORTFOLIO_ITEMS),
        Region::Testimonials => testimonials::render_testimonials(TESTIMONIALS, &state.carousel),
        Region::Contact => contact::render_contact_form(&state.contact),
        Region::Vault => vault::render_vault(
            &state.visible_assets(),
            &state.asset_query,
            state.asset_error.as_deref(),
            state.last_export.as_deref(),
        ),
        Region::Footer => footer::render_footer(state.year),
    }
}

pub fn render_page<S: KeyValueStore>(state: &PageState<S>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Neon Nexus | Future-ready digital experiences" }
                link rel="stylesheet" href="styles.css";
            }
            body id="top" {
                header id=(Region::Nav.container_id()) class="site-header" {
                    (render_region(state, Region::Nav))
                }
                main {
                    section class="hero" aria-labelledby="hero-title" {
                        h1 id="hero-title" { "Design the worlds your audience wants to live in." }
                        p { "Immersive brand systems, adaptive learning, and AI-native operations from one studio." }
                        div id=(Region::Metrics.container_id()) class="metrics" {
                            (render_region(state, Region::Metrics))
                        }
                    }
                    section id="insights" class="section" {
                        h2 { "Latest Insights" }
                        div id=(Region::Blog.container_id()) class="card-grid" role="list" {
                            (render_region(state, Region::Blog))
                        }
                    }
                    section id="learning" class="section" {
                        h2 { "Learning Tracks" }
                        div class="learning__controls" {
                            (learning::render_learning_filter(state.learning_filter))
                        }
                        div id=(Region::Learning.container_id()) class="learning__grid" role="list" {
                            (render_region(state, Region::Learning))
                        }
                    }
                    section id="portfolio" class="section" {
                        h2 { "Selected Work" }
                        div id=(Region::Portfolio.container_id()) class="portfolio__grid" role="list" {
                            (render_region(state, Region::Portfolio))
                        }
                    }
                    section id="testimonials" class="section" {
                        h2 { "Client Voices" }
                        div id=(Region::Testimonials.container_id()) class="carousel" {
                            (render_region(state, Region::Testimonials))
                        }
                    }
                    section id="vault" class="section" {
                        h2 { "Asset Vault" }
                        div id=(Region::Vault.container_id()) class="vault" {
                            (render_region(state, Region::Vault))
                        }
                    }
                    section id="contact" class="section" {
                        h2 { "Start a Project" }
                        form id=(Region::Contact.container_id()) class="contact__form" novalidate {
                            (render_region(state, Region::Contact))
                        }
                    }
                }
                footer id=(Region::Footer.container_id()) class="site-footer" {
                    (render_region(state, Region::Footer))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::AssetDraft;
    use crate::store::MemoryStore;
    use crate::ui::UiEvent;
    use crate::vault::AssetVault;

    fn page() -> PageState<MemoryStore> {
        let config = SiteConfig::default();
        PageState::new(
            AssetVault::new(MemoryStore::new(), &config.storage_key),
            &config,
            2042,
        )
    }

    #[test]
    fn page_carries_every_binding_selector() {
        let html = render_page(&page()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        for selector in [
            r#"id="blog-list""#,
            r#"id="learning-list""#,
            r#"id="learning-filter""#,
            r#"id="portfolio-list""#,
            r#"id="asset-form""#,
            r#"id="asset-list""#,
            r#"id="asset-search""#,
            r#"id="asset-export""#,
            r#"class="nav__toggle""#,
            r#"class="nav__list""#,
            r#"class="metric__number""#,
            r#"<span id="year">2042</span>"#,
        ] {
            assert!(html.contains(selector), "missing {}", selector);
        }
    }

    #[test]
    fn vault_region_reflects_state_after_dispatch() {
        let mut state = page();
        let before = render_region(&state, Region::Vault).into_string();
        assert!(before.contains("No assets logged yet"));

        state
            .dispatch(UiEvent::AssetSubmitted(AssetDraft::new(
                "Orbit",
                "model",
                "https://cdn.example/orbit.glb",
                "xr, 3d",
            )))
            .unwrap();
        let after = render_region(&state, Region::Vault).into_string();
        assert!(after.contains("<strong>Orbit</strong>"));
        assert!(after.contains(r#"<span class="asset-card__tag">3d</span>"#));
    }
}
