//! blogspa - tooling for a single-page app embedded in a Blogger theme.

mod api;
mod bridge;
mod cli;
mod config;
mod data;
mod logger;
mod patch;
mod reactive;
mod store;
mod utils;

use anyhow::{Context, Result};
use api::BloggerClient;
use bridge::{HostBridge, HostGlobal, HostSlot, JsonFileGlobal, capture_host_variables};
use clap::Parser;
use cli::{Cli, Commands};
use config::{ENV_API_KEY, ENV_BLOG_ID, ProjectConfig};
use serde::Serialize;
use std::{fs, path::Path, sync::Arc};
use store::{PageStore, PostStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ProjectConfig::load(&cli)?;

    if config.config_path.exists() {
        log!("config"; "using {}", config.config_path.display());
    } else {
        log!("config"; "{} not found, using defaults and environment", config.config_path.display());
    }

    if cli.is_fetch() && config.api.credentials().is_none() {
        log!("fetch"; "{ENV_API_KEY} or {ENV_BLOG_ID} not set, only sample data is available");
    }

    match &cli.command {
        Commands::Patch { .. } => patch::run_blogger(&config.build),
        Commands::PatchJsdelivr { .. } => patch::run_jsdelivr(&config.build),
        Commands::Posts { tag, id } => show_posts(&config, tag.as_deref(), *id).await?,
        Commands::Pages { id, url } => show_pages(&config, id.as_deref(), url.as_deref()).await?,
        Commands::Host { snapshot, raw } => show_host(snapshot, *raw)?,
    }

    Ok(())
}

/// Fetch posts, then print the requested view of them.
async fn show_posts(config: &ProjectConfig, tag: Option<&str>, id: Option<u64>) -> Result<()> {
    let store = PostStore::create(BloggerClient::new(&config.api));
    store.ready().await;

    if let Some(err) = store.error().get() {
        log!("fetch"; "keeping current posts: {err}");
    }

    let posts: Vec<_> = match id {
        Some(id) => store.get_post_by_id(id).into_iter().collect(),
        None => {
            store.filter_by_tag(tag);
            store.filtered_posts()
        }
    };

    log!("fetch"; "tags: {}", store.all_tags().join(", "));
    print_json(&posts)
}

/// Fetch pages, then print all of them or the one asked for.
async fn show_pages(config: &ProjectConfig, id: Option<&str>, url: Option<&str>) -> Result<()> {
    let store = PageStore::create(BloggerClient::new(&config.api));
    store.ready().await;

    let pages: Vec<_> = match (id, url) {
        (Some(id), _) => store.get_page_by_id(id).into_iter().collect(),
        (None, Some(url)) => store.get_page_by_url(url).into_iter().collect(),
        (None, None) => store.pages().get(),
    };

    print_json(&pages)
}

/// Mount a bridge over a captured host data object and print its projections.
fn show_host(path: &Path, raw: bool) -> Result<()> {
    let source: Arc<dyn HostGlobal> = if raw {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let data: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Arc::new(HostSlot::new(Some(capture_host_variables(&data))))
    } else {
        Arc::new(JsonFileGlobal::new(path))
    };

    let bridge = HostBridge::new(source);
    bridge.mount();
    print_json(&bridge.projections())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}
