use crate::navigation::NavState;
use maud::{html, Markup};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#insights", "Insights"),
    ("#learning", "Learning"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Voices"),
    ("#vault", "Asset Vault"),
    ("#contact", "Contact"),
];

pub fn render_nav(nav: &NavState) -> Markup {
    html! {
        a class="brand" href="#top" { "Neon" span { "Nexus" } }
        nav class="nav" aria-label="Primary" {
            button class="nav__toggle" type="button" aria-controls="primary-navigation"
                aria-expanded=(nav.toggle_expanded.to_string()) {
                span class="sr-only" { "Toggle navigation" }
                span class="nav__icon" aria-hidden="true" {}
            }
            ul id="primary-navigation" class="nav__list" aria-expanded=(nav.list_expanded.to_string()) {
                @for (href, label) in NAV_LINKS {
                    li { a href=(href) { (label) } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::DEFAULT_BREAKPOINT;

    #[test]
    fn aria_attributes_follow_state() {
        let mut nav = NavState::new(500, DEFAULT_BREAKPOINT);
        let html = render_nav(&nav).into_string();
        assert!(html.contains(r#"class="nav__list" aria-expanded="false""#));

        nav.toggle();
        let html = render_nav(&nav).into_string();
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(!html.contains(r#"aria-expanded="false""#));
    }
}
