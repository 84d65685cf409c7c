//! Build-output patcher errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("no {kind} matching `{pattern}` in `{dir}`")]
    MissingArtifact {
        kind: &'static str,
        pattern: String,
        dir: PathBuf,
    },

    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}
