//! Build-output patchers.
//!
//! One-shot, offline steps run after the bundler. Both locate a
//! content-hashed file in the output directory and rewrite HTML to point at
//! it:
//!
//! | Variant  | Reads                      | Writes                                          |
//! |----------|----------------------------|-------------------------------------------------|
//! | Blogger  | static template, `index.*.js` | `index-template.html`, `blogger-snippet.html` |
//! | jsDelivr | `index.html`, `index.*.js`, `index.*.css` | `index.html`, `blogger-template.html` |
//!
//! The `run_*` entry points never fail: errors are logged and the build that
//! invoked them carries on.

mod blogger;
mod error;
mod jsdelivr;

pub use blogger::{BloggerArtifacts, patch_blogger};
pub use error::PatchError;
pub use jsdelivr::{JsDelivrArtifacts, inject_capture_script, patch_jsdelivr};

use crate::{config::BuildConfig, log};
use regex::Regex;
use std::{fs, path::Path};

/// Run the Blogger patcher with the resolved build settings.
pub fn run_blogger(build: &BuildConfig) {
    let blogger = &build.blogger;
    log!("patch"; "looking for JS files in {}", blogger.output.display());

    match patch_blogger(&build.template, &blogger.output, &blogger.hosting_url) {
        Ok(artifacts) => {
            log!("patch"; "updated template for {}", artifacts.entry);
            log!("patch"; "created {}", artifacts.template.display());
            log!("patch"; "created {}", artifacts.snippet.display());
        }
        Err(err) => log!("error"; "patching blogger output: {err:#}"),
    }
}

/// Run the jsDelivr patcher with the resolved build settings.
pub fn run_jsdelivr(build: &BuildConfig) {
    let jsdelivr = &build.jsdelivr;
    log!("patch"; "looking for files in {}", jsdelivr.output.display());

    match patch_jsdelivr(&jsdelivr.output, jsdelivr.base_url.as_deref()) {
        Ok(artifacts) => {
            log!("patch"; "JS: {}/{}", artifacts.base_url, artifacts.script);
            log!("patch"; "CSS: {}/{}", artifacts.base_url, artifacts.stylesheet);
            log!("patch"; "created {}", artifacts.template.display());
            log!("patch"; "{}", jsdelivr::deployment_instructions());
        }
        Err(err) => log!("error"; "patching jsdelivr output: {err:#}"),
    }
}

/// Name of the file in `dir` matching `pattern`.
///
/// Several matches resolve to the lexicographically first, with a warning.
fn find_artifact(dir: &Path, pattern: &Regex, kind: &'static str) -> Result<String, PatchError> {
    let entries = fs::read_dir(dir).map_err(|err| PatchError::Io(dir.to_path_buf(), err))?;

    let mut matches: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|ty| ty.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| pattern.is_match(name))
        .collect();
    matches.sort();

    let Some(first) = matches.first().cloned() else {
        return Err(PatchError::MissingArtifact {
            kind,
            pattern: pattern.as_str().to_owned(),
            dir: dir.to_path_buf(),
        });
    };

    if matches.len() > 1 {
        log!("patch"; "{} files match {kind} pattern, using {first}", matches.len());
    }
    Ok(first)
}

fn read(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|err| PatchError::Io(path.to_path_buf(), err))
}

fn write(path: &Path, content: &str) -> Result<(), PatchError> {
    fs::write(path, content).map_err(|err| PatchError::Io(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn js_pattern() -> Regex {
        Regex::new(r"^index\..+\.js$").unwrap()
    }

    #[test]
    fn test_find_artifact_single() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.a1b2.js"), "").unwrap();
        fs::write(dir.path().join("index.a1b2.css"), "").unwrap();
        fs::write(dir.path().join("vendor.ff.js"), "").unwrap();

        let found = find_artifact(dir.path(), &js_pattern(), "entry script").unwrap();
        assert_eq!(found, "index.a1b2.js");
    }

    #[test]
    fn test_find_artifact_picks_first_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.zz.js"), "").unwrap();
        fs::write(dir.path().join("index.aa.js"), "").unwrap();

        let found = find_artifact(dir.path(), &js_pattern(), "entry script").unwrap();
        assert_eq!(found, "index.aa.js");
    }

    #[test]
    fn test_find_artifact_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("index.dir.js")).unwrap();

        let err = find_artifact(dir.path(), &js_pattern(), "entry script").unwrap_err();
        assert!(matches!(err, PatchError::MissingArtifact { .. }));
    }

    #[test]
    fn test_find_artifact_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err =
            find_artifact(&dir.path().join("nope"), &js_pattern(), "entry script").unwrap_err();
        assert!(matches!(err, PatchError::Io(..)));
    }
}
