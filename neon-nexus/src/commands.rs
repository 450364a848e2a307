use crate::form::{validate, ValidationReport, CONTACT_FIELDS};
use crate::models::{Asset, AssetDraft, LearningFilter};
use crate::preview::{run_preview, PreviewSummary};
use crate::state::AppState;
use crate::ui::{render_page, UiEvent};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn list_assets(app_state: &mut AppState, query: &str) -> Result<Vec<Asset>, String> {
    Ok(app_state.vault().list(query))
}

pub fn add_asset(
    app_state: &mut AppState,
    name: String,
    kind: String,
    link: String,
    tags: String,
) -> Result<Asset, String> {
    let draft = AssetDraft::new(name, kind, link, tags);
    app_state.vault().add(&draft).map_err(|e| e.to_string())
}

pub fn remove_asset(
    app_state: &mut AppState,
    position: usize,
    query: &str,
) -> Result<Asset, String> {
    app_state
        .vault()
        .remove_at(position, query)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("No asset at position {}", position))
}

pub fn export_assets(app_state: &mut AppState, dir: &Path) -> Result<PathBuf, String> {
    let file_name = app_state.config.export_file_name.clone();
    app_state
        .vault()
        .export_to_dir(dir, &file_name)
        .map_err(|e| e.to_string())
}

pub fn render_site(
    app_state: &mut AppState,
    filter: Option<&str>,
    query: Option<&str>,
) -> Result<String, String> {
    let mut page = app_state.page();
    if let Some(filter) = filter {
        // Reject typos up front; the select control can never send one.
        filter.parse::<LearningFilter>()?;
        page.dispatch(UiEvent::LearningFilterChanged(filter.to_string()))
            .map_err(|e| e.to_string())?;
    }
    if let Some(query) = query {
        page.dispatch(UiEvent::AssetSearch(query.to_string()))
            .map_err(|e| e.to_string())?;
    }
    Ok(render_page(&page).into_string())
}

pub fn write_site(
    app_state: &mut AppState,
    out_dir: &Path,
    filter: Option<&str>,
    query: Option<&str>,
) -> Result<PathBuf, String> {
    let html = render_site(app_state, filter, query)?;
    fs::create_dir_all(out_dir).map_err(|e| e.to_string())?;
    let path = out_dir.join("index.html");
    fs::write(&path, html).map_err(|e| e.to_string())?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

pub fn validate_contact(values: BTreeMap<String, String>) -> ValidationReport {
    validate(CONTACT_FIELDS, &values)
}

pub fn preview<W: Write>(
    app_state: &mut AppState,
    total: Duration,
    out: &mut W,
) -> Result<PreviewSummary, String> {
    let frame = app_state.config.frame_interval();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| e.to_string())?;
    let mut page = app_state.page();
    runtime
        .block_on(run_preview(&mut page, total, frame, out))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::store::MemoryStore;

    fn app() -> AppState {
        AppState::with_store(SiteConfig::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn add_list_remove_round() {
        let mut app = app();
        add_asset(&mut app, "Hero loop".into(), "video".into(), "https://v".into(), "hero, loop".into())
            .unwrap();
        add_asset(&mut app, "Brand deck".into(), "document".into(), "https://d".into(), String::new())
            .unwrap();

        let names: Vec<_> = list_assets(&mut app, "").unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Brand deck", "Hero loop"]);

        let removed = remove_asset(&mut app, 0, "loop").unwrap();
        assert_eq!(removed.name, "Hero loop");
        assert_eq!(list_assets(&mut app, "").unwrap().len(), 1);

        let err = remove_asset(&mut app, 3, "").unwrap_err();
        assert_eq!(err, "No asset at position 3");
    }

    #[test]
    fn add_surfaces_validation_message() {
        let mut app = app();
        let err = add_asset(&mut app, "x".into(), "video".into(), "  ".into(), String::new())
            .unwrap_err();
        assert_eq!(err, "Asset link is required");
    }

    #[test]
    fn render_rejects_unknown_filter() {
        let mut app = app();
        assert!(render_site(&mut app, Some("cooking"), None).is_err());
        let html = render_site(&mut app, Some("strategy"), None).unwrap();
        assert!(html.contains("Strategic Foresight Lab"));
        assert!(!html.contains("Spatial Interface Architect"));
    }

    #[test]
    fn write_site_creates_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        let path = write_site(&mut app, &dir.path().join("public"), None, None).unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("Heliosverse Immersive Expo"));
    }

    #[test]
    fn contact_validation_collects_all_errors() {
        let report = validate_contact(BTreeMap::new());
        assert_eq!(report.errors.len(), 3);

        let values = BTreeMap::from([
            ("name".to_string(), "Rae".to_string()),
            ("email".to_string(), "rae@orbital.studio".to_string()),
            ("message".to_string(), "Hi".to_string()),
        ]);
        assert!(validate_contact(values).is_valid());
    }
}
