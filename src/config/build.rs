//! `[build]` section configuration.
//!
//! Locations used by the build-output patchers.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[build]` section in blogspa.toml.
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Static HTML template containing the `script.src = '...index.js'` placeholder.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Blogger (single script) bundle settings.
    #[serde(default)]
    pub blogger: BloggerBuildConfig,

    /// jsDelivr (script + stylesheet) bundle settings.
    #[serde(default)]
    pub jsdelivr: JsDelivrBuildConfig,
}

/// `[build.blogger]` section.
///
/// # Example
/// ```toml
/// [build.blogger]
/// output = "dist-blogger"
/// hosting_url = "https://example.github.io/blog-app"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BloggerBuildConfig {
    /// Bundler output directory.
    #[serde(default = "defaults::build::blogger::output")]
    #[educe(Default = defaults::build::blogger::output())]
    pub output: PathBuf,

    /// Where the hashed script will be hosted; written into the snippet.
    #[serde(default = "defaults::build::blogger::hosting_url")]
    #[educe(Default = defaults::build::blogger::hosting_url())]
    pub hosting_url: String,
}

/// `[build.jsdelivr]` section.
///
/// # Example
/// ```toml
/// [build.jsdelivr]
/// output = "dist-jsdelivr"
/// base_url = "https://cdn.jsdelivr.net/gh/user/repo@v1/dist-jsdelivr"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct JsDelivrBuildConfig {
    /// Bundler output directory.
    #[serde(default = "defaults::build::jsdelivr::output")]
    #[educe(Default = defaults::build::jsdelivr::output())]
    pub output: PathBuf,

    /// CDN base URL. Unset keeps the `{{JSDELIVR_BASE_URL}}` placeholder.
    #[serde(default = "defaults::build::jsdelivr::base_url")]
    #[educe(Default = defaults::build::jsdelivr::base_url())]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::ProjectConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            template = "static/template.html"

            [build.blogger]
            output = "out/blogger"
            hosting_url = "https://host.example/app"

            [build.jsdelivr]
            output = "out/cdn"
            base_url = "https://cdn.jsdelivr.net/gh/me/blog@v2/out/cdn"
        "#;
        let config: ProjectConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.template, PathBuf::from("static/template.html"));
        assert_eq!(config.build.blogger.output, PathBuf::from("out/blogger"));
        assert_eq!(config.build.blogger.hosting_url, "https://host.example/app");
        assert_eq!(config.build.jsdelivr.output, PathBuf::from("out/cdn"));
        assert_eq!(
            config.build.jsdelivr.base_url.as_deref(),
            Some("https://cdn.jsdelivr.net/gh/me/blog@v2/out/cdn")
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: ProjectConfig =
            toml::from_str("[build.jsdelivr]\nbase_url = \"https://cdn\"\n").unwrap();

        assert_eq!(config.build.jsdelivr.output, PathBuf::from("dist-jsdelivr"));
        assert_eq!(config.build.blogger.hosting_url, "YOUR_HOSTING_URL");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<ProjectConfig, _> =
            toml::from_str("[build.blogger]\nminify = true\n");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
