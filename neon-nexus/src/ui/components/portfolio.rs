use crate::models::PortfolioItem;
use maud::{html, Markup};

pub fn render_portfolio(items: &[PortfolioItem]) -> Markup {
    html! {
        @for item in items {
            article class="portfolio__item" role="listitem" {
                h3 { (item.title) }
                p { (item.summary) }
                div class="portfolio__tags" {
                    @for tag in item.tags {
                        span { "#" (tag) }
                    }
                }
                p class="card__meta" { (item.result) }
                button class="btn btn--primary" type="button" { "Book Case Study" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO_ITEMS;

    #[test]
    fn tags_render_with_hash_prefix() {
        let html = render_portfolio(PORTFOLIO_ITEMS).into_string();
        assert!(html.contains("<span>#XR</span>"));
        assert!(html.contains("<span>#AI Ops</span>"));
        assert_eq!(html.matches("portfolio__item").count(), PORTFOLIO_ITEMS.len());
    }
}
