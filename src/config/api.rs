//! `[api]` section configuration.
//!
//! Credentials for the Blogger content API. Both values are optional in the
//! file because they usually come from the environment.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[api]` section in blogspa.toml.
///
/// # Example
/// ```toml
/// [api]
/// key = "AIza..."
/// blog_id = "1234567890"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API access key.
    #[serde(default)]
    pub key: Option<String>,

    /// Blog (collection) identifier.
    #[serde(default)]
    pub blog_id: Option<String>,

    /// Base URL of the v3 API, without trailing slash.
    #[serde(default = "defaults::api::base_url")]
    #[educe(Default = defaults::api::base_url())]
    pub base_url: String,
}

/// Both credentials, present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub blog_id: String,
}

impl ApiConfig {
    /// Resolve credentials, treating empty strings as absent.
    pub fn credentials(&self) -> Option<Credentials> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        Some(Credentials {
            key: present(&self.key)?,
            blog_id: present(&self.blog_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::ProjectConfig;

    #[test]
    fn test_credentials_present() {
        let config = ProjectConfig::from_str(
            r#"
            [api]
            key = "k"
            blog_id = "b"
        "#,
        )
        .unwrap();

        let creds = config.api.credentials().unwrap();
        assert_eq!(creds.key, "k");
        assert_eq!(creds.blog_id, "b");
    }

    #[test]
    fn test_credentials_missing_either() {
        let only_key = ProjectConfig::from_str("[api]\nkey = \"k\"\n").unwrap();
        assert!(only_key.api.credentials().is_none());

        let only_id = ProjectConfig::from_str("[api]\nblog_id = \"b\"\n").unwrap();
        assert!(only_id.api.credentials().is_none());
    }

    #[test]
    fn test_credentials_empty_counts_as_missing() {
        let config = ProjectConfig::from_str("[api]\nkey = \"\"\nblog_id = \"b\"\n").unwrap();
        assert!(config.api.credentials().is_none());
    }

    #[test]
    fn test_base_url_override() {
        let config =
            ProjectConfig::from_str("[api]\nbase_url = \"http://127.0.0.1:9000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    }
}
