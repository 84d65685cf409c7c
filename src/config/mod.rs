//! Project configuration management for `blogspa.toml`.
//!
//! # Sections
//!
//! | Section             | Purpose                                         |
//! |---------------------|-------------------------------------------------|
//! | `[api]`             | Blogger content API credentials and endpoint    |
//! | `[build]`           | Static template location                        |
//! | `[build.blogger]`   | Blogger bundle output and snippet hosting URL   |
//! | `[build.jsdelivr]`  | jsDelivr bundle output and CDN base URL         |
//!
//! # Resolution order
//!
//! Defaults, then `blogspa.toml` (optional), then the environment
//! (`VITE_BLOGGER_API_KEY`, `VITE_BLOGGER_BLOG_ID`, `VITE_JSDELIVR_BASE_URL`),
//! then CLI flags.
//!
//! # Example
//!
//! ```toml
//! [api]
//! key = "AIza..."
//! blog_id = "1234567890"
//!
//! [build.blogger]
//! hosting_url = "https://example.github.io/blog-app"
//!
//! [build.jsdelivr]
//! base_url = "https://cdn.jsdelivr.net/gh/user/repo@v1/dist-jsdelivr"
//! ```

mod api;
mod build;
pub mod defaults;
mod error;

pub use api::{ApiConfig, Credentials};
pub use build::{BloggerBuildConfig, BuildConfig, JsDelivrBuildConfig};
pub use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the API access key.
pub const ENV_API_KEY: &str = "VITE_BLOGGER_API_KEY";
/// Environment variable holding the blog (collection) id.
pub const ENV_BLOG_ID: &str = "VITE_BLOGGER_BLOG_ID";
/// Environment variable holding the jsDelivr base URL.
pub const ENV_JSDELIVR_BASE_URL: &str = "VITE_JSDELIVR_BASE_URL";

/// Root configuration structure representing blogspa.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Remote content API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Build-output patcher settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl ProjectConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the full configuration for a CLI invocation.
    ///
    /// A missing config file is not an error: defaults plus the environment
    /// are enough to run every command.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let root = PathBuf::from(shellexpand::tilde(&root.to_string_lossy()).into_owned());
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.config_path = normalize_path(&config_path);
        config.apply_env(|name| std::env::var(name).ok());
        config.update_with_cli(cli, &root);
        config.validate()?;

        Ok(config)
    }

    /// Overlay values from the environment.
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// shadow the config file.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup(ENV_API_KEY) {
            self.api.key = Some(key);
        }
        if let Some(blog_id) = lookup(ENV_BLOG_ID) {
            self.api.blog_id = Some(blog_id);
        }
        if let Some(base_url) = lookup(ENV_JSDELIVR_BASE_URL) {
            self.build.jsdelivr.base_url = Some(base_url);
        }
    }

    /// Update configuration with CLI arguments and resolve paths against root
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        match &cli.command {
            Commands::Patch {
                output,
                template,
                hosting_url,
            } => {
                update_option(&mut self.build.blogger.output, output.as_ref());
                update_option(&mut self.build.template, template.as_ref());
                update_option(&mut self.build.blogger.hosting_url, hosting_url.as_ref());
            }
            Commands::PatchJsdelivr { output, base_url } => {
                update_option(&mut self.build.jsdelivr.output, output.as_ref());
                if base_url.is_some() {
                    self.build.jsdelivr.base_url = base_url.clone();
                }
            }
            _ => {}
        }

        self.update_path_with_root(root);
    }

    /// Normalize all paths relative to the root directory
    fn update_path_with_root(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.build.template = normalize_path(&root.join(&self.build.template));
        self.build.blogger.output = normalize_path(&root.join(&self.build.blogger.output));
        self.build.jsdelivr.output = normalize_path(&root.join(&self.build.jsdelivr.output));
    }

    /// Validate configuration values that would otherwise fail late
    pub fn validate(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            bail!(ConfigError::Validation(
                "[api.base_url] must start with http:// or https://".into()
            ));
        }

        if self.build.blogger.hosting_url.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[build.blogger.hosting_url] must not be empty".into()
            ));
        }

        if let Some(base_url) = &self.build.jsdelivr.base_url
            && base_url.trim().is_empty()
        {
            bail!(ConfigError::Validation(
                "[build.jsdelivr.base_url] must not be empty when set".into()
            ));
        }

        Ok(())
    }
}

/// Update config option if CLI value is provided
fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
    if let Some(option) = cli_option {
        *config_option = option.clone();
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
