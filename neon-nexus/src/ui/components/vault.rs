use crate::models::AssetKind;
use crate::vault::VaultEntry;
use maud::{html, Markup};
use std::path::Path;

pub const EMPTY_VAULT_MESSAGE: &str =
    "No assets logged yet. Add your first item to populate the vault.";

pub fn render_asset_form(error: Option<&str>) -> Markup {
    html! {
        form id="asset-form" class="vault__form" {
            label for="asset-name" { "Asset name" }
            input id="asset-name" name="asset-name" type="text" required;
            label for="asset-type" { "Type" }
            select id="asset-type" name="asset-type" required {
                option value="" { "Select type" }
                @for kind in AssetKind::ALL {
                    option value=(kind.as_str()) { (kind.label()) }
                }
            }
            label for="asset-link" { "Link" }
            input id="asset-link" name="asset-link" type="url" required;
            label for="asset-tags" { "Tags (comma separated)" }
            input id="asset-tags" name="asset-tags" type="text";
            button class="btn btn--primary" type="submit" { "Log Asset" }
            @if let Some(error) = error {
                p class="form__error" role="alert" { (error) }
            }
        }
    }
}

/// Only http(s) links become clickable.
fn is_web_link(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

pub fn render_asset_list(entries: &[VaultEntry]) -> Markup {
    html! {
        @for entry in entries {
            article class="asset-card" role="listitem" data-position=(entry.position) {
                strong { (entry.asset.name) }
                div class="asset-card__meta" {
                    span { "Type: " (entry.asset.kind.as_str()) }
                    @if is_web_link(&entry.asset.link) {
                        a href=(entry.asset.link) target="_blank" rel="noopener" class="btn btn--ghost" {
                            "Open Asset"
                        }
                    } @else {
                        span class="asset-card__link" title=(entry.asset.link) { "Unsupported link" }
                    }
                }
                div class="asset-card__tags" {
                    @if entry.asset.tags.is_empty() {
                        span class="asset-card__tag" { "untagged" }
                    } @else {
                        @for tag in &entry.asset.tags {
                            span class="asset-card__tag" { (tag) }
                        }
                    }
                }
                button type="button" aria-label="Remove asset" data-remove=(entry.position) { "✕" }
            }
        }
        @if entries.is_empty() {
            p { (EMPTY_VAULT_MESSAGE) }
        }
    }
}

pub fn render_vault(
    entries: &[VaultEntry],
    query: &str,
    error: Option<&str>,
    last_export: Option<&Path>,
) -> Markup {
    html! {
        (render_asset_form(error))
        div class="vault__tools" {
            input id="asset-search" type="search" value=(query)
                placeholder="Search by name or tag" aria-label="Search assets";
            button id="asset-export" class="btn btn--ghost" type="button" { "Export JSON" }
            @if let Some(path) = last_export {
                span class="vault__export-note" { "Exported to " (path.display().to_string()) }
            }
        }
        div id="asset-list" class="vault__list" role="list" {
            (render_asset_list(entries))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Asset;

    fn entry(position: usize, name: &str, tags: &[&str]) -> VaultEntry {
        VaultEntry {
            position,
            index: position,
            asset: Asset {
                name: name.to_string(),
                kind: AssetKind::Code,
                link: "https://git.example/repo".to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_asset_list(&[]).into_string();
        assert!(html.contains(EMPTY_VAULT_MESSAGE));
    }

    #[test]
    fn untagged_assets_get_placeholder_tag() {
        let html = render_asset_list(&[entry(0, "Shader pack", &[])]).into_string();
        assert!(html.contains(r#"<span class="asset-card__tag">untagged</span>"#));
        assert!(html.contains("Type: code"));
        assert!(html.contains(r#"target="_blank" rel="noopener""#));
        assert!(!html.contains(EMPTY_VAULT_MESSAGE));
    }

    #[test]
    fn script_links_are_not_clickable() {
        let mut scripted = entry(0, "Trap", &[]);
        scripted.asset.link = "JavaScript:alert(1)".to_string();
        let html = render_asset_list(&[scripted, entry(1, "Repo", &[])]).into_string();
        assert!(!html.contains(r#"href="JavaScript:alert(1)""#));
        assert!(html.contains("Unsupported link"));
        assert!(html.contains(r#"href="https://git.example/repo""#));
    }

    #[test]
    fn remove_buttons_carry_filtered_position() {
        let entries = [entry(0, "a", &["x"]), entry(1, "b", &["y", "z"])];
        let html = render_asset_list(&entries).into_string();
        assert!(html.contains(r#"data-remove="1""#));
        assert_eq!(html.matches(r#"class="asset-card__tag""#).count(), 3);
    }

    #[test]
    fn vault_shows_query_and_error() {
        let html = render_vault(&[], "neon", Some("Asset link is required"), None).into_string();
        assert!(html.contains(r#"value="neon""#));
        assert!(html.contains("Asset link is required"));
        assert!(html.contains(r#"id="asset-export""#));
    }
}
