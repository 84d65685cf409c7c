//! Blogger variant: hashed script referenced from a static template.

use super::{PatchError, find_artifact, read, write};
use crate::log;
use regex::{Captures, Regex};
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

const SNIPPET: &str = include_str!("../embed/blogger/snippet.html");

const TEMPLATE_FILE: &str = "index-template.html";
const SNIPPET_FILE: &str = "blogger-snippet.html";

static ENTRY_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index\..+\.js$").expect("valid regex"));

/// `script.src = '<prefix>index.js'` with the prefix captured.
static SCRIPT_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"script\.src = '(.*)index\.js'").expect("valid regex"));

static SNIPPET_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(hosting_url|entry)\}").expect("valid regex"));

/// Files written by [`patch_blogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloggerArtifacts {
    /// Hashed entry script file name
    pub entry: String,
    pub template: PathBuf,
    pub snippet: PathBuf,
}

/// Point the template at the hashed entry script and write the snippet.
///
/// Nothing is written unless the entry script is found and the template is
/// readable.
pub fn patch_blogger(
    template: &Path,
    output: &Path,
    hosting_url: &str,
) -> Result<BloggerArtifacts, PatchError> {
    let entry = find_artifact(output, &ENTRY_SCRIPT, "entry script")?;
    log!("patch"; "found JS file: {entry}");

    let html = read(template)?;
    let html = rewrite_script_src(&html, &entry);

    let template_path = output.join(TEMPLATE_FILE);
    write(&template_path, &html)?;

    let snippet_path = output.join(SNIPPET_FILE);
    write(&snippet_path, &render_snippet(hosting_url, &entry))?;

    Ok(BloggerArtifacts {
        entry,
        template: template_path,
        snippet: snippet_path,
    })
}

/// Replace the first `script.src = '...index.js'` with the hashed name.
fn rewrite_script_src(html: &str, entry: &str) -> String {
    if !SCRIPT_SRC.is_match(html) {
        log!("patch"; "template has no `script.src = '...index.js'` placeholder");
        return html.to_owned();
    }

    SCRIPT_SRC
        .replace(html, |caps: &Captures| format!("script.src = '{}{entry}'", &caps[1]))
        .into_owned()
}

/// Fill the snippet placeholders in one pass, so substituted values are
/// never scanned again.
fn render_snippet(hosting_url: &str, entry: &str) -> String {
    SNIPPET_PLACEHOLDER
        .replace_all(SNIPPET, |caps: &Captures| match &caps[1] {
            "hosting_url" => hosting_url.to_owned(),
            _ => entry.to_owned(),
        })
        .into_owned()
}
