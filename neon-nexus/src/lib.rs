pub mod carousel;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod counter;
pub mod database;
pub mod form;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod preview;
pub mod state;
pub mod store;
pub mod timeline;
pub mod ui;
pub mod vault;

use crate::cli::{AssetAction, Cli, Command};
use crate::config::SiteConfig;
use crate::state::AppState;
use clap::Parser;
use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = SiteConfig::resolve(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(store) = cli.store {
        config.store_path = Some(store);
    }

    match cli.command {
        // Contact validation never touches the store.
        Command::Contact {
            name,
            email,
            company,
            message,
        } => contact(name, email, company, message),
        Command::Render { out, filter, query } => {
            let mut app_state = AppState::open(config).map_err(|e| e.to_string())?;
            match out {
                Some(dir) => {
                    let path = commands::write_site(
                        &mut app_state,
                        &dir,
                        filter.as_deref(),
                        query.as_deref(),
                    )?;
                    println!("Rendered {}", path.display());
                }
                None => {
                    let html =
                        commands::render_site(&mut app_state, filter.as_deref(), query.as_deref())?;
                    println!("{}", html);
                }
            }
            Ok(())
        }
        Command::Assets { action } => {
            let mut app_state = AppState::open(config).map_err(|e| e.to_string())?;
            assets(&mut app_state, action)
        }
        Command::Preview { millis } => {
            let mut app_state = AppState::open(config).map_err(|e| e.to_string())?;
            let summary = commands::preview(
                &mut app_state,
                Duration::from_millis(millis),
                &mut io::stdout(),
            )?;
            println!(
                "Preview done: {} slide change(s), {} counter(s) finished",
                summary.slides_shown.len(),
                summary.counters_finished.len()
            );
            Ok(())
        }
    }
}

fn assets(app_state: &mut AppState, action: AssetAction) -> Result<(), String> {
    match action {
        AssetAction::List { query, json } => {
            let assets = commands::list_assets(app_state, query.trim())?;
            if json {
                let text = serde_json::to_string_pretty(&assets).map_err(|e| e.to_string())?;
                println!("{}", text);
            } else if assets.is_empty() {
                println!("{}", ui::components::vault::EMPTY_VAULT_MESSAGE);
            } else {
                for (position, asset) in assets.iter().enumerate() {
                    let tags = if asset.tags.is_empty() {
                        "untagged".to_string()
                    } else {
                        asset.tags.join(", ")
                    };
                    println!(
                        "{:>3}  {}  [{}]  {}  ({})",
                        position,
                        asset.name,
                        asset.kind,
                        asset.link,
                        tags
                    );
                }
            }
        }
        AssetAction::Add {
            name,
            kind,
            link,
            tags,
        } => {
            let asset = commands::add_asset(app_state, name, kind, link, tags)?;
            println!("Logged asset: {}", asset.name);
        }
        AssetAction::Remove { position, query } => {
            let asset = commands::remove_asset(app_state, position, query.trim())?;
            println!("Removed asset: {}", asset.name);
        }
        AssetAction::Export { out } => {
            let path = commands::export_assets(app_state, &out)?;
            println!("Exported assets to {}", path.display());
        }
    }
    Ok(())
}

fn contact(name: String, email: String, company: String, message: String) -> Result<(), String> {
    let values = BTreeMap::from([
        ("name".to_string(), name),
        ("email".to_string(), email),
        ("company".to_string(), company),
        ("message".to_string(), message),
    ]);
    let report = commands::validate_contact(values);
    for error in &report.errors {
        println!("{}: {}", error.field, error.message);
    }
    println!("{}", report.message);
    if report.is_valid() {
        Ok(())
    } else {
        Err(format!("{} field(s) need attention", report.errors.len()))
    }
}
