//! Where the host data object comes from.
//!
//! The bridge never owns the global: the host page sets it before the app
//! starts (or never does). [`HostGlobal`] is the read side of that slot.

use super::HostEnvironmentSnapshot;
use crate::log;
use parking_lot::RwLock;
use std::{fs, io::ErrorKind, path::PathBuf};

/// Read access to the externally owned host data object.
pub trait HostGlobal: Send + Sync {
    /// Current value of the global, `None` while the host has not set it.
    fn read(&self) -> Option<HostEnvironmentSnapshot>;
}

/// In-memory slot written by the host side.
#[derive(Debug, Default)]
pub struct HostSlot(RwLock<Option<HostEnvironmentSnapshot>>);

impl HostSlot {
    pub fn new(initial: Option<HostEnvironmentSnapshot>) -> Self {
        Self(RwLock::new(initial))
    }

    /// Host page assigns the global.
    pub fn set(&self, snapshot: HostEnvironmentSnapshot) {
        *self.0.write() = Some(snapshot);
    }

    /// Host page removes the global.
    pub fn clear(&self) {
        *self.0.write() = None;
    }
}

impl HostGlobal for HostSlot {
    fn read(&self) -> Option<HostEnvironmentSnapshot> {
        self.0.read().clone()
    }
}

/// A `bloggerData` document captured to disk.
///
/// A missing file reads as "not embedded". An unreadable file or one that is
/// not JSON is logged and treated the same way. Any JSON document counts as
/// present, with mistyped fields defaulted.
#[derive(Debug, Clone)]
pub struct JsonFileGlobal {
    path: PathBuf,
}

impl JsonFileGlobal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HostGlobal for JsonFileGlobal {
    fn read(&self) -> Option<HostEnvironmentSnapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log!("error"; "reading {}: {err}", self.path.display());
                return None;
            }
        };

        serde_json::from_str(&content)
            .map(HostEnvironmentSnapshot::from_value)
            .map_err(|err| log!("error"; "parsing {}: {err}", self.path.display()))
            .ok()
    }
}
