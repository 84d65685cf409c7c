//! Shape of the data object the host page injects as `window.bloggerData`.
//!
//! Every struct defaults field by field: the capture script only fills
//! `blog`, `post` and `page`, and older templates omit more than that. A
//! field of the wrong type also falls back to its default, so one odd value
//! never discards the rest of the object.

use educe::Educe;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Everything the host page knows about the current view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostEnvironmentSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub blog: HostBlog,
    #[serde(deserialize_with = "lenient")]
    pub post: HostPost,
    #[serde(deserialize_with = "lenient")]
    pub page: HostPage,
    #[serde(deserialize_with = "lenient")]
    pub navigation: HostNavigation,
    #[serde(deserialize_with = "lenient")]
    pub archive: HostArchive,
    #[serde(deserialize_with = "lenient")]
    pub search: HostSearch,
}

#[derive(Debug, Clone, Educe, PartialEq, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, rename_all = "camelCase")]
pub struct HostBlog {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub homepage_url: String,
    #[serde(deserialize_with = "lenient")]
    pub page_name: String,
    /// "index", "item", "static_page", "archive", "error"...
    #[serde(deserialize_with = "lenient")]
    pub page_type: String,
    #[serde(deserialize_with = "lenient")]
    pub locale: String,
    #[serde(deserialize_with = "lenient")]
    pub is_mobile: bool,
    #[educe(Default = default_direction())]
    #[serde(deserialize_with = "lenient_direction")]
    pub language_direction: String,
    #[serde(deserialize_with = "lenient")]
    pub meta_description: String,
    #[serde(deserialize_with = "lenient")]
    pub blog_id: String,
    #[serde(deserialize_with = "lenient")]
    pub version: String,
    #[serde(deserialize_with = "lenient")]
    pub author: HostAuthor,
}

fn default_direction() -> String {
    "ltr".into()
}

/// Field value, or its default when the host sent something of another type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_direction<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| default_direction()))
}

impl HostEnvironmentSnapshot {
    /// Snapshot of any JSON value; a non-object yields the empty snapshot.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostAuthor {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub profile_url: String,
    #[serde(deserialize_with = "lenient")]
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostPost {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub author: String,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: String,
    #[serde(deserialize_with = "lenient")]
    pub content: String,
    #[serde(deserialize_with = "lenient")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub num_comments: u32,
    #[serde(deserialize_with = "lenient")]
    pub allow_comments: bool,
    #[serde(deserialize_with = "lenient")]
    pub first_image_url: String,
    #[serde(deserialize_with = "lenient")]
    pub is_first_post: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient")]
    pub featured_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub related_posts: Vec<HostRelatedPost>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostRelatedPost {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostPage {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
}

/// Pager links; empty string means "no such page".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostNavigation {
    #[serde(deserialize_with = "lenient")]
    pub newer_page_url: String,
    #[serde(deserialize_with = "lenient")]
    pub older_page_url: String,
    #[serde(deserialize_with = "lenient")]
    pub newer_post_url: String,
    #[serde(deserialize_with = "lenient")]
    pub older_post_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostArchive {
    #[serde(deserialize_with = "lenient")]
    pub is_archive: bool,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSearch {
    #[serde(deserialize_with = "lenient")]
    pub is_search: bool,
    #[serde(deserialize_with = "lenient")]
    pub query: String,
    #[serde(deserialize_with = "lenient")]
    pub results_count: u32,
}
