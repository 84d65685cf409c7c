//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blogger-embedded SPA tooling
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: blogspa.toml)
    #[arg(short = 'C', long, default_value = "blogspa.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Point the static template at the hashed script and write the Blogger snippet
    Patch {
        /// Bundler output directory (relative to root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Static template containing `script.src = '...index.js'`
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Hosting URL written into the snippet
        #[arg(long = "hosting-url")]
        hosting_url: Option<String>,
    },

    /// Rewrite the jsDelivr bundle's index.html into a Blogger template
    PatchJsdelivr {
        /// Bundler output directory (relative to root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CDN base URL, e.g. https://cdn.jsdelivr.net/gh/USER/REPO@VERSION/dist-jsdelivr
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },

    /// Fetch posts and print the (filtered) list as JSON
    Posts {
        /// Only show posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only show the post with this id
        #[arg(long)]
        id: Option<u64>,
    },

    /// Fetch pages and print them as JSON
    Pages {
        /// Only show the page with this id
        #[arg(long)]
        id: Option<String>,

        /// Only show the page with this canonical path
        #[arg(long)]
        url: Option<String>,
    },

    /// Read a captured host data object and print its projections
    Host {
        /// JSON file holding `window.bloggerData` (or the raw Blogger `data` with --raw)
        snapshot: PathBuf,

        /// Treat the file as the raw Blogger `data` object and capture it first
        #[arg(long)]
        raw: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_patch(&self) -> bool {
        matches!(
            self.command,
            Commands::Patch { .. } | Commands::PatchJsdelivr { .. }
        )
    }
    pub const fn is_fetch(&self) -> bool {
        matches!(self.command, Commands::Posts { .. } | Commands::Pages { .. })
    }
}
