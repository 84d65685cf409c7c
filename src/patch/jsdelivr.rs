//! jsDelivr variant: the bundler's own `index.html` turned into a Blogger
//! theme that loads the hashed assets from the CDN.
//!
//! Every rewrite is either a literal replacement of markup the bundler emits
//! or a guarded insertion, so running the patcher twice leaves the file as the
//! first run wrote it.

use super::{PatchError, find_artifact, read, write};
use crate::log;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

const CAPTURE_SCRIPT: &str = include_str!("../embed/blogger/capture.html");

/// Substituted when no base URL is configured.
pub const BASE_URL_PLACEHOLDER: &str = "{{JSDELIVR_BASE_URL}}";

/// Presence marks the capture script as already injected.
const CAPTURE_MARKER: &str = "window.bloggerData";

const INDEX_FILE: &str = "index.html";
const TEMPLATE_FILE: &str = "blogger-template.html";

const HEAD_END: &str = "</head>";
const APP_ANCHOR: &str = r#"<div id="app"></div>"#;
const SIDEBAR: &str = "<b:section class='sidebar' id='sidebar' showaddelement='yes'/>";

const VITE_TITLE: &str = "<title>Vite App</title>";
const BLOGGER_TITLE: &str = "<title><data:view.title.escaped/></title>\n<b:skin><![CDATA[ /* Your theme's CSS goes here */ ]]></b:skin>";

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index\..*\.js$").expect("valid regex"));
static STYLESHEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index\..*\.css$").expect("valid regex"));

/// What [`patch_jsdelivr`] used and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDelivrArtifacts {
    pub script: String,
    pub stylesheet: String,
    pub base_url: String,
    pub index: PathBuf,
    pub template: PathBuf,
}

/// Rewrite `<output>/index.html` for Blogger and copy it to
/// `blogger-template.html`.
pub fn patch_jsdelivr(
    output: &Path,
    base_url: Option<&str>,
) -> Result<JsDelivrArtifacts, PatchError> {
    let script = find_artifact(output, &SCRIPT, "script")?;
    let stylesheet = find_artifact(output, &STYLESHEET, "stylesheet")?;
    log!("patch"; "found JS file: {script}, CSS file: {stylesheet}");

    let base_url = base_url
        .map(|url| url.trim_end_matches('/'))
        .unwrap_or(BASE_URL_PLACEHOLDER)
        .to_owned();

    let index = output.join(INDEX_FILE);
    let html = read(&index)?;
    let html = rewrite_asset_tags(&html, &base_url, &script, &stylesheet);
    let html = html.replacen(VITE_TITLE, BLOGGER_TITLE, 1);
    let html = inject_capture_script(&html);
    let html = inject_sidebar(&html);
    write(&index, &html)?;

    let template = output.join(TEMPLATE_FILE);
    fs::copy(&index, &template).map_err(|err| PatchError::Io(template.clone(), err))?;

    Ok(JsDelivrArtifacts {
        script,
        stylesheet,
        base_url,
        index,
        template,
    })
}

/// Point the relative module script and stylesheet at `<base>/<file>`.
fn rewrite_asset_tags(html: &str, base_url: &str, script: &str, stylesheet: &str) -> String {
    let script_tag = format!(r#"<script type="module" crossorigin src="./{script}"></script>"#);
    let link_tag = format!(r#"<link rel="stylesheet" crossorigin href="./{stylesheet}">"#);

    if !html.contains(&script_tag) {
        log!("patch"; "no relative script tag for {script} in {INDEX_FILE}");
    }
    if !html.contains(&link_tag) {
        log!("patch"; "no relative stylesheet link for {stylesheet} in {INDEX_FILE}");
    }

    html.replacen(
        &script_tag,
        &format!(
            r#"<script type="module" crossorigin="anonymous" src="{base_url}/{script}"></script>"#
        ),
        1,
    )
    .replacen(
        &link_tag,
        &format!(r#"<link rel="stylesheet" crossorigin="anonymous" href="{base_url}/{stylesheet}"/>"#),
        1,
    )
}

/// Insert the host-variable capture script before `</head>`, once.
pub fn inject_capture_script(html: &str) -> String {
    if html.contains(CAPTURE_MARKER) {
        return html.to_owned();
    }
    html.replacen(HEAD_END, &format!("{CAPTURE_SCRIPT}{HEAD_END}"), 1)
}

/// Insert the Blogger sidebar section after the app mount point, once.
fn inject_sidebar(html: &str) -> String {
    if html.contains(SIDEBAR) {
        return html.to_owned();
    }
    html.replacen(APP_ANCHOR, &format!("{APP_ANCHOR}\n{SIDEBAR}"), 1)
}

/// What to do with `blogger-template.html` once the patch has run.
pub(super) fn deployment_instructions() -> String {
    format!(
        "DEPLOYMENT INSTRUCTIONS:
1. Push your code to GitHub
2. Replace the placeholder {BASE_URL_PLACEHOLDER} in {TEMPLATE_FILE} with your jsDelivr URL:
   https://cdn.jsdelivr.net/gh/USERNAME/REPO@VERSION/dist-jsdelivr
3. Copy the contents of {TEMPLATE_FILE} to your Blogger template"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>Vite App</title>
    <script type="module" crossorigin src="./index.a1b2.js"></script>
    <link rel="stylesheet" crossorigin href="./index.c3d4.css">
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>
"#;

    fn setup(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "").unwrap();
        }
        fs::write(dir.path().join(INDEX_FILE), INDEX).unwrap();
        dir
    }

    #[test]
    fn test_patch_with_base_url() {
        let dir = setup(&["index.a1b2.js", "index.c3d4.css"]);
        let base = "https://cdn.jsdelivr.net/gh/u/r@v1/dist-jsdelivr/";

        let artifacts = patch_jsdelivr(dir.path(), Some(base)).unwrap();
        assert_eq!(artifacts.script, "index.a1b2.js");
        assert_eq!(artifacts.stylesheet, "index.c3d4.css");

        let html = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
        assert!(html.contains(
            r#"<script type="module" crossorigin="anonymous" src="https://cdn.jsdelivr.net/gh/u/r@v1/dist-jsdelivr/index.a1b2.js"></script>"#
        ));
        assert!(html.contains(
            r#"<link rel="stylesheet" crossorigin="anonymous" href="https://cdn.jsdelivr.net/gh/u/r@v1/dist-jsdelivr/index.c3d4.css"/>"#
        ));
        assert!(html.contains(BLOGGER_TITLE));
        assert!(!html.contains(VITE_TITLE));
        assert!(html.contains(&format!("{APP_ANCHOR}\n{SIDEBAR}")));

        let head_end = html.find(HEAD_END).unwrap();
        let marker = html.find(CAPTURE_MARKER).unwrap();
        assert!(marker < head_end);

        let template = fs::read_to_string(dir.path().join(TEMPLATE_FILE)).unwrap();
        assert_eq!(template, html);
    }

    #[test]
    fn test_patch_without_base_url_uses_placeholder() {
        let dir = setup(&["index.a1b2.js", "index.c3d4.css"]);

        let artifacts = patch_jsdelivr(dir.path(), None).unwrap();
        assert_eq!(artifacts.base_url, BASE_URL_PLACEHOLDER);

        let html = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
        assert!(html.contains(r#"src="{{JSDELIVR_BASE_URL}}/index.a1b2.js""#));
    }

    #[test]
    fn test_patch_twice_is_stable() {
        let dir = setup(&["index.a1b2.js", "index.c3d4.css"]);

        patch_jsdelivr(dir.path(), None).unwrap();
        let first = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
        patch_jsdelivr(dir.path(), None).unwrap();
        let second = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches(CAPTURE_MARKER).count(), 1);
        assert_eq!(second.matches(SIDEBAR).count(), 1);
    }

    #[test]
    fn test_capture_injection_is_idempotent() {
        let once = inject_capture_script(INDEX);
        let twice = inject_capture_script(&once);
        assert_eq!(once, twice);
        assert!(once.contains(&format!("{CAPTURE_SCRIPT}{HEAD_END}")));
    }

    #[test]
    fn test_capture_skipped_when_marker_present() {
        let html = "<head><script>window.bloggerData = {};</script></head>";
        assert_eq!(inject_capture_script(html), html);
    }

    #[test]
    fn test_missing_stylesheet_leaves_index_alone() {
        let dir = setup(&["index.a1b2.js"]);

        let err = patch_jsdelivr(dir.path(), None).unwrap_err();
        assert!(err.to_string().starts_with("no stylesheet matching"));
        assert_eq!(fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap(), INDEX);
        assert!(!dir.path().join(TEMPLATE_FILE).exists());
    }

    #[test]
    fn test_missing_index_html() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.a1b2.js"), "").unwrap();
        fs::write(dir.path().join("index.c3d4.css"), "").unwrap();

        let err = patch_jsdelivr(dir.path(), None).unwrap_err();
        assert!(matches!(err, PatchError::Io(..)));
    }

    #[test]
    fn test_deployment_instructions_mention_placeholder() {
        let text = deployment_instructions();
        assert!(text.contains(BASE_URL_PLACEHOLDER));
        assert!(text.contains(TEMPLATE_FILE));
    }
}
