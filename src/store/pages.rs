//! Page store.
//!
//! Same shape as the post store with two differences: every failure reverts
//! the list to the bundled sample pages, and each API item is repaired field
//! by field instead of being rejected.

use super::InitialFetch;
use crate::{
    api::{BloggerClient, RemotePage},
    data::{Page, sample_pages},
    log,
    reactive::Signal,
    utils::{date::now_rfc3339, hash::fingerprint, url::url_path},
};
use std::sync::Arc;
use tokio::sync::Mutex;

const UNTITLED: &str = "Untitled Page";
const NO_CONTENT: &str = "<p>No content available</p>";

/// Observable page state plus the actions that change it.
#[derive(Debug)]
pub struct PageStore {
    client: BloggerClient,
    pages: Signal<Vec<Page>>,
    is_loading: Signal<bool>,
    error: Signal<Option<String>>,
    initial_fetch: InitialFetch,
    /// Held for the whole of a fetch so fetches on one store never overlap.
    fetch_lock: Mutex<()>,
}

impl PageStore {
    /// Idle store seeded with the sample pages. Nothing is fetched.
    pub fn new(client: BloggerClient) -> Self {
        Self {
            client,
            pages: Signal::new(sample_pages()),
            is_loading: Signal::new(false),
            error: Signal::new(None),
            initial_fetch: InitialFetch::default(),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Create the store and start its first fetch on the current tokio runtime.
    pub fn create(client: BloggerClient) -> Arc<Self> {
        let store = Arc::new(Self::new(client));
        let task = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.fetch_pages().await })
        };
        store.initial_fetch.set(task);
        store
    }

    /// Wait for the fetch started by [`PageStore::create`], if any.
    pub async fn ready(&self) {
        self.initial_fetch.wait("pages").await;
    }

    /// Fetch all pages and replace the list.
    ///
    /// On any failure the error is recorded and the list reverts to the
    /// sample pages. A call made while another fetch is running waits for it
    /// to finish.
    pub async fn fetch_pages(&self) {
        let _running = self.fetch_lock.lock().await;
        self.is_loading.set(true);
        if self.client.has_credentials() {
            self.error.set(None);
        }

        match self.client.list_pages().await {
            Ok(items) => {
                let now = now_rfc3339();
                let pages: Vec<Page> = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| normalize_page(item, index, &now))
                    .collect();
                log!("fetch"; "loaded {} pages", pages.len());
                self.pages.set(pages);
            }
            Err(err) => {
                log!("error"; "fetching pages: {err}");
                self.error.set(Some(err.to_string()));
                log!("fetch"; "using sample pages as fallback");
                self.pages.set(sample_pages());
            }
        }

        self.is_loading.set(false);
    }

    pub fn get_page_by_id(&self, id: &str) -> Option<Page> {
        self.pages
            .with(|pages| pages.iter().find(|page| page.id == id).cloned())
    }

    pub fn get_page_by_url(&self, url: &str) -> Option<Page> {
        self.pages
            .with(|pages| pages.iter().find(|page| page.url == url).cloned())
    }

    pub fn pages(&self) -> &Signal<Vec<Page>> {
        &self.pages
    }

    pub fn is_loading(&self) -> &Signal<bool> {
        &self.is_loading
    }

    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }
}

/// Map an API page onto the application's page shape, defaulting each
/// missing field on its own.
///
/// `index` is the item's position in the response, used only to keep
/// synthesized ids distinct.
fn normalize_page(item: RemotePage, index: usize, now: &str) -> Page {
    let path = canonical_path(&item);
    let url = path.unwrap_or_else(|| {
        format!("/page/{}", item.id.as_deref().unwrap_or("unknown"))
    });
    let id = item.id.clone().unwrap_or_else(|| synthesized_id(&item, index));

    Page {
        id,
        title: item.title.unwrap_or_else(|| UNTITLED.to_owned()),
        content: item.content.unwrap_or_else(|| NO_CONTENT.to_owned()),
        published: item.published.unwrap_or_else(|| now.to_owned()),
        updated: item.updated.unwrap_or_else(|| now.to_owned()),
        url,
    }
}

/// Path of the page's `rel="alternate"` link.
///
/// `None` when there is no link set, no alternate link, or its href is not a
/// valid absolute URL. None of these fail the fetch.
fn canonical_path(item: &RemotePage) -> Option<String> {
    let id = item.id.as_deref().unwrap_or("unknown");

    if item.links.is_none() {
        log!("fetch"; "page {id} has no links");
        return None;
    }

    let href = item.alternate_link()?.href.as_str();
    if href.is_empty() {
        return None;
    }

    url_path(href)
        .map_err(|err| log!("error"; "page {id}: {err}"))
        .ok()
}

/// Stable stand-in id for a page the API returned without one.
fn synthesized_id(item: &RemotePage, index: usize) -> String {
    let seed = format!(
        "{index}\0{}\0{}\0{}",
        item.title.as_deref().unwrap_or_default(),
        item.published.as_deref().unwrap_or_default(),
        item.content.as_deref().unwrap_or_default(),
    );
    format!("unknown-{}", fingerprint(seed.as_bytes(), 7))
}
