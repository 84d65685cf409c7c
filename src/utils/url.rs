//! Absolute URL helpers.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid absolute URL `{0}`")]
pub struct InvalidUrl(pub String);

/// Path component of an absolute URL, as a browser would report it.
///
/// Dot segments are resolved and characters outside the path set are
/// percent-encoded; a URL without a path yields `/`.
///
/// ```ignore
/// url_path("https://blog.example/p/about.html?m=1") // → "/p/about.html"
/// ```
pub fn url_path(href: &str) -> Result<String, InvalidUrl> {
    Url::parse(href)
        .map(|url| url.path().to_owned())
        .map_err(|_| InvalidUrl(href.to_owned()))
}
