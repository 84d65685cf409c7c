//! Post store.
//!
//! Holds the post list shown by the application. Seeded with the sample
//! posts; a successful fetch replaces the whole list, a failed one keeps it.

use super::InitialFetch;
use crate::{
    api::{BloggerClient, RemotePost},
    data::{Post, sample_posts},
    log,
    reactive::Signal,
    utils::date::calendar_day,
};
use std::{num::ParseIntError, sync::Arc};
use tokio::sync::Mutex;

/// Observable post state plus the actions that change it.
#[derive(Debug)]
pub struct PostStore {
    client: BloggerClient,
    posts: Signal<Vec<Post>>,
    is_loading: Signal<bool>,
    error: Signal<Option<String>>,
    selected_tag: Signal<Option<String>>,
    initial_fetch: InitialFetch,
    /// Held for the whole of a fetch so fetches on one store never overlap.
    fetch_lock: Mutex<()>,
}

impl PostStore {
    /// Idle store seeded with the sample posts. Nothing is fetched.
    pub fn new(client: BloggerClient) -> Self {
        Self {
            client,
            posts: Signal::new(sample_posts()),
            is_loading: Signal::new(false),
            error: Signal::new(None),
            selected_tag: Signal::new(None),
            initial_fetch: InitialFetch::default(),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Create the store and start its first fetch on the current tokio runtime.
    ///
    /// The fetch starts on the runtime's next scheduling point, so observers
    /// registered right after this call see the whole loading transition.
    pub fn create(client: BloggerClient) -> Arc<Self> {
        let store = Arc::new(Self::new(client));
        let task = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.fetch_posts().await })
        };
        store.initial_fetch.set(task);
        store
    }

    /// Wait for the fetch started by [`PostStore::create`], if any.
    pub async fn ready(&self) {
        self.initial_fetch.wait("posts").await;
    }

    /// Fetch all posts and replace the list.
    ///
    /// Errors are recorded in [`PostStore::error`]; the list is left untouched.
    /// A call made while another fetch is running waits for it to finish.
    pub async fn fetch_posts(&self) {
        let _running = self.fetch_lock.lock().await;
        self.is_loading.set(true);
        if self.client.has_credentials() {
            self.error.set(None);
        }

        match self.client.list_posts().await {
            Ok(items) => {
                let posts: Vec<Post> = items.into_iter().map(normalize_post).collect();
                log!("fetch"; "loaded {} posts", posts.len());
                self.posts.set(posts);
            }
            Err(err) => {
                log!("error"; "fetching posts: {err}");
                self.error.set(Some(err.to_string()));
            }
        }

        self.is_loading.set(false);
    }

    /// Set (or clear, with `None`) the active tag filter.
    pub fn filter_by_tag(&self, tag: Option<&str>) {
        self.selected_tag.set(tag.map(str::to_owned));
    }

    /// Posts matching the active tag filter; every post when there is none.
    pub fn filtered_posts(&self) -> Vec<Post> {
        match self.selected_tag.get() {
            None => self.posts.get(),
            Some(tag) => self.posts.with(|posts| {
                posts.iter().filter(|post| post.has_tag(&tag)).cloned().collect()
            }),
        }
    }

    /// Distinct tags across all posts, in first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        self.posts.with(|posts| {
            let mut tags: Vec<String> = Vec::new();
            for tag in posts.iter().flat_map(|post| &post.tags) {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
            tags
        })
    }

    pub fn get_post_by_id(&self, id: u64) -> Option<Post> {
        self.posts
            .with(|posts| posts.iter().find(|post| post.id == id).cloned())
    }

    pub fn posts(&self) -> &Signal<Vec<Post>> {
        &self.posts
    }

    pub fn is_loading(&self) -> &Signal<bool> {
        &self.is_loading
    }

    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    pub fn selected_tag(&self) -> &Signal<Option<String>> {
        &self.selected_tag
    }
}

/// Map an API post onto the application's post shape.
fn normalize_post(item: RemotePost) -> Post {
    let id = parse_leading_int(&item.id).unwrap_or_else(|err| {
        log!("error"; "post id `{}` is not a usable number: {err}", item.id);
        0
    });

    Post {
        id,
        title: item.title,
        content: item.content,
        author: item.author.display_name,
        date: calendar_day(&item.published),
        tags: item.labels.unwrap_or_default(),
    }
}

/// Parse the leading decimal digits of `s`; 0 when there are none.
///
/// Digits that do not fit a `u64` are an error.
fn parse_leading_int(s: &str) -> Result<u64, ParseIntError> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    match &s[..end] {
        "" => Ok(0),
        digits => digits.parse(),
    }
}
