//! JSON file persistence helpers
//!
//! Every persisted value in the app is a whole JSON document overwritten on
//! each mutation. Reads are tolerant: a missing file means "no data yet" and
//! a malformed file is logged and replaced by the default, never surfaced as
//! an error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a JSON value from `path`, falling back to the default.
///
/// Missing files are expected (first run). Malformed contents are logged at
/// warn level and treated as absent.
pub fn read_json_or_default<T>(path: &Path) -> T
where
    T: Default + DeserializeOwned,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Malformed JSON in {:?}, using defaults: {}", path, e);
            T::default()
        }
    }
}

/// Write a JSON value to `path`, creating parent directories as needed
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {:?}", parent))?;
    }

    let contents = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {:?}", path))?;

    std::fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let value: HashMap<String, u32> = read_json_or_default(&dir.path().join("absent.json"));
        assert!(value.is_empty());
    }

    #[test]
    fn malformed_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let value: HashMap<String, u32> = read_json_or_default(&path);
        assert!(value.is_empty());
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/value.json");

        let mut value = HashMap::new();
        value.insert("ten".to_string(), 10u32);

        write_json(&path, &value).unwrap();
        let loaded: HashMap<String, u32> = read_json_or_default(&path);
        assert_eq!(loaded, value);
    }
}
