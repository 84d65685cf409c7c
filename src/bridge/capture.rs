//! Build a snapshot from Blogger's raw template `data` object.
//!
//! This is what the capture script injected by the jsDelivr patcher does in
//! the browser: start from an empty object and shallow-merge `data.blog`,
//! the first of `data.posts` and the first of `data.pages` into it.

use super::HostEnvironmentSnapshot;
use serde_json::{Map, Value};

/// Snapshot of a raw Blogger `data` object.
///
/// Fields the raw object carries with an unexpected type keep their default;
/// the rest of the object is still captured.
pub fn capture_host_variables(raw: &Value) -> HostEnvironmentSnapshot {
    let mut merged = match serde_json::to_value(HostEnvironmentSnapshot::default()) {
        Ok(value) => value,
        Err(_) => return HostEnvironmentSnapshot::default(),
    };

    assign(&mut merged, "blog", raw.get("blog"));
    assign(&mut merged, "post", first(raw.get("posts")));
    assign(&mut merged, "page", first(raw.get("pages")));

    HostEnvironmentSnapshot::from_value(merged)
}

/// First element of a non-empty array.
fn first(value: Option<&Value>) -> Option<&Value> {
    value?.as_array()?.first()
}

/// `target[section] = Object.assign(target[section], source)`.
fn assign(target: &mut Value, section: &str, source: Option<&Value>) {
    let Some(Value::Object(source)) = source else {
        return;
    };

    if let Some(Value::Object(dest)) = target.get_mut(section) {
        merge_shallow(dest, source);
    }
}

fn merge_shallow(dest: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        dest.insert(key.clone(), value.clone());
    }
}
