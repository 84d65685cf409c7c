//! Wire types of the Blogger v3 list endpoints.
//!
//! Only the fields the stores read are modelled. Everything is optional or
//! defaulted so that one odd item never fails the whole response; the stores
//! decide how each missing field is filled in.

use serde::Deserialize;

/// `GET /blogs/{id}/posts` and `GET /blogs/{id}/pages` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    /// Absent when the blog has no content of this kind.
    #[serde(default = "Option::default")]
    pub items: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemotePost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: RemoteAuthor,
    pub published: String,
    pub labels: Option<Vec<String>>,
}

/// Nested author object of a post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteAuthor {
    pub display_name: String,
}

/// A page as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemotePage {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    pub links: Option<Vec<RemoteLink>>,
}

/// One entry of a page's link set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteLink {
    pub rel: String,
    pub href: String,
}

impl RemotePage {
    /// The `rel="alternate"` link, if the page has a link set containing one.
    pub fn alternate_link(&self) -> Option<&RemoteLink> {
        self.links.as_ref()?.iter().find(|link| link.rel == "alternate")
    }
}
