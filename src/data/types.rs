//! Content items shown by the application.
//!
//! Both types are immutable values: a store replaces its whole list on every
//! completed fetch and never edits an item in place.

use serde::Serialize;

/// A blog post, normalized from the remote API or taken from sample data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Numeric post id
    pub id: u64,

    /// Post title
    pub title: String,

    /// Pre-rendered HTML body
    pub content: String,

    /// Author display name
    pub author: String,

    /// Publication day as `YYYY-MM-DD`
    pub date: String,

    /// Labels attached to the post
    pub tags: Vec<String>,
}

/// A static blog page (About, Contact, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page id as given by the API
    pub id: String,

    /// Page title
    pub title: String,

    /// Pre-rendered HTML body
    pub content: String,

    /// Publication timestamp
    pub published: String,

    /// Last update timestamp
    pub updated: String,

    /// Canonical relative path used for routing (e.g. "/p/about-us.html")
    pub url: String,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
