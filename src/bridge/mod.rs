//! Host-environment bridge.
//!
//! Exposes the host page's data object as read-only observable state plus a
//! handful of derived projections. No network or file access of its own: it
//! only reads whatever [`HostGlobal`] it was given.
//!
//! # Lifecycle
//!
//! ```text
//!  consumer becomes active ──► mount() ──► refresh()
//!                                             │
//!                      global present? ───────┤
//!                         │ yes               │ no
//!                         ▼                   ▼
//!              snapshot = global       snapshot unchanged
//!              is_embedded = true      is_embedded = false
//! ```
//!
//! The last snapshot survives the global disappearing; only the embedded flag
//! tracks presence.

mod capture;
mod source;
mod types;

pub use capture::capture_host_variables;
pub use source::{HostGlobal, HostSlot, JsonFileGlobal};
pub use types::{
    HostArchive, HostAuthor, HostBlog, HostEnvironmentSnapshot, HostNavigation, HostPage,
    HostPost, HostRelatedPost, HostSearch,
};

use crate::{log, reactive::Signal};
use std::sync::Arc;

/// Shared view of the host data object.
pub struct HostBridge {
    source: Arc<dyn HostGlobal>,
    data: Signal<HostEnvironmentSnapshot>,
    is_embedded: Signal<bool>,
}

impl HostBridge {
    /// Bridge over `source`, starting from the empty snapshot.
    pub fn new(source: Arc<dyn HostGlobal>) -> Self {
        Self {
            source,
            data: Signal::new(HostEnvironmentSnapshot::default()),
            is_embedded: Signal::new(false),
        }
    }

    /// Called when a consuming UI unit becomes active.
    pub fn mount(&self) -> HostEnvironmentSnapshot {
        self.refresh()
    }

    /// Re-read the global and return the (possibly unchanged) snapshot.
    pub fn refresh(&self) -> HostEnvironmentSnapshot {
        match self.source.read() {
            Some(snapshot) => {
                log!("host"; "host data loaded: {}", snapshot.blog.title);
                self.data.set(snapshot);
                self.is_embedded.set(true);
            }
            None => {
                log!("host"; "not running inside a host page");
                self.is_embedded.set(false);
            }
        }
        self.data.get()
    }

    /// Read-only snapshot signal.
    pub fn data(&self) -> &Signal<HostEnvironmentSnapshot> {
        &self.data
    }

    /// Read-only embedded-flag signal.
    pub fn is_embedded(&self) -> &Signal<bool> {
        &self.is_embedded
    }

    pub fn blog_title(&self) -> String {
        self.data.with(|d| d.blog.title.clone())
    }

    pub fn current_page_type(&self) -> String {
        self.data.with(|d| d.blog.page_type.clone())
    }

    pub fn current_post_title(&self) -> String {
        self.data.with(|d| d.post.title.clone())
    }

    pub fn current_post_content(&self) -> String {
        self.data.with(|d| d.post.content.clone())
    }

    pub fn is_archive_page(&self) -> bool {
        self.data.with(|d| d.archive.is_archive)
    }

    pub fn is_search_page(&self) -> bool {
        self.data.with(|d| d.search.is_search)
    }

    pub fn search_query(&self) -> String {
        self.data.with(|d| d.search.query.clone())
    }

    pub fn post_labels(&self) -> Vec<String> {
        self.data.with(|d| d.post.labels.clone())
    }

    pub fn has_newer_page(&self) -> bool {
        self.data.with(|d| !d.navigation.newer_page_url.is_empty())
    }

    pub fn has_older_page(&self) -> bool {
        self.data.with(|d| !d.navigation.older_page_url.is_empty())
    }

    pub fn navigation(&self) -> HostNavigation {
        self.data.with(|d| d.navigation.clone())
    }

    pub fn archive(&self) -> HostArchive {
        self.data.with(|d| d.archive.clone())
    }

    pub fn search(&self) -> HostSearch {
        self.data.with(|d| d.search.clone())
    }

    /// All scalar projections at once, for printing.
    pub fn projections(&self) -> serde_json::Value {
        serde_json::json!({
            "isEmbedded": self.is_embedded.get(),
            "blogTitle": self.blog_title(),
            "currentPageType": self.current_page_type(),
            "currentPostTitle": self.current_post_title(),
            "currentPostContent": self.current_post_content(),
            "isArchivePage": self.is_archive_page(),
            "isSearchPage": self.is_search_page(),
            "searchQuery": self.search_query(),
            "postLabels": self.post_labels(),
            "hasNewerPage": self.has_newer_page(),
            "hasOlderPage": self.has_older_page(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::record;

    fn snapshot(title: &str) -> HostEnvironmentSnapshot {
        let mut snapshot = HostEnvironmentSnapshot::default();
        snapshot.blog.title = title.to_owned();
        snapshot.blog.page_type = "item".to_owned();
        snapshot.post.title = "Post".to_owned();
        snapshot.post.content = "<p>body</p>".to_owned();
        snapshot.post.labels = vec!["rust".to_owned()];
        snapshot.navigation.older_page_url = "/search?updated-max=x".to_owned();
        snapshot.search.is_search = true;
        snapshot.search.query = "q".to_owned();
        snapshot
    }

    #[test]
    fn test_defaults_before_mount() {
        let bridge = HostBridge::new(Arc::new(HostSlot::default()));
        assert!(!bridge.is_embedded().get());
        assert_eq!(bridge.data().get(), HostEnvironmentSnapshot::default());
        assert_eq!(bridge.blog_title(), "");
        assert!(!bridge.has_newer_page());
    }

    #[test]
    fn test_mount_reads_global() {
        let slot = Arc::new(HostSlot::new(Some(snapshot("Demo"))));
        let bridge = HostBridge::new(slot);

        let data = bridge.mount();

        assert_eq!(data.blog.title, "Demo");
        assert!(bridge.is_embedded().get());
        assert_eq!(bridge.blog_title(), "Demo");
        assert_eq!(bridge.current_page_type(), "item");
        assert_eq!(bridge.current_post_title(), "Post");
        assert_eq!(bridge.current_post_content(), "<p>body</p>");
        assert_eq!(bridge.post_labels(), vec!["rust"]);
        assert!(!bridge.has_newer_page());
        assert!(bridge.has_older_page());
        assert!(bridge.is_search_page());
        assert_eq!(bridge.search_query(), "q");
        assert!(!bridge.is_archive_page());
        assert_eq!(bridge.search().query, "q");
        assert_eq!(bridge.navigation().newer_page_url, "");
        assert_eq!(bridge.archive(), HostArchive::default());
    }

    #[test]
    fn test_absent_global_keeps_last_snapshot() {
        let slot = Arc::new(HostSlot::new(Some(snapshot("Demo"))));
        let bridge = HostBridge::new(Arc::clone(&slot) as Arc<dyn HostGlobal>);
        bridge.mount();

        slot.clear();
        let data = bridge.refresh();

        assert!(!bridge.is_embedded().get());
        assert_eq!(data.blog.title, "Demo");
    }

    #[test]
    fn test_refresh_picks_up_new_global() {
        let slot = Arc::new(HostSlot::default());
        let bridge = HostBridge::new(Arc::clone(&slot) as Arc<dyn HostGlobal>);
        let titles = record(bridge.data());

        bridge.mount();
        assert!(!bridge.is_embedded().get());

        slot.set(snapshot("Later"));
        bridge.refresh();

        assert!(bridge.is_embedded().get());
        assert_eq!(bridge.blog_title(), "Later");
        assert_eq!(titles.lock().len(), 1);
    }

    #[test]
    fn test_mistyped_global_counts_as_embedded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bloggerData.json");
        std::fs::write(&path, r#"{"blog": {"title": "Demo"}, "post": {"numComments": "3"}}"#)
            .unwrap();
        let bridge = HostBridge::new(Arc::new(JsonFileGlobal::new(&path)));

        bridge.mount();

        assert!(bridge.is_embedded().get());
        assert_eq!(bridge.blog_title(), "Demo");
    }

    #[test]
    fn test_projections_json() {
        let bridge = HostBridge::new(Arc::new(HostSlot::new(Some(snapshot("Demo")))));
        bridge.mount();

        let json = bridge.projections();
        assert_eq!(json["isEmbedded"], true);
        assert_eq!(json["blogTitle"], "Demo");
        assert_eq!(json["hasOlderPage"], true);
    }
}
