//! Persisted per-character mnemonic content

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::storage;

/// Saved generation output for one character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct MnemonicRecord {
    /// Saved story text
    #[serde(skip_serializing_if = "Option::is_none")]
    story: Option<String>,
    /// Base64-encoded generated illustration
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

/// Saved mnemonic stories and illustrations, keyed by character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MnemonicStore {
    characters: HashMap<char, MnemonicRecord>,
}

impl MnemonicStore {
    /// Saved story for a character, if any
    pub fn story(&self, character: char) -> Option<&str> {
        self.characters.get(&character)?.story.as_deref()
    }

    /// Saved illustration for a character, if any
    pub fn image(&self, character: char) -> Option<&str> {
        self.characters.get(&character)?.image.as_deref()
    }

    /// Whether a character has a saved story
    pub fn has_story(&self, character: char) -> bool {
        self.story(character).is_some()
    }

    /// Save a story for a character, replacing any previous one
    pub fn set_story(&mut self, character: char, story: impl Into<String>) {
        self.characters.entry(character).or_default().story = Some(story.into());
    }

    /// Save an illustration for a character, replacing any previous one
    pub fn set_image(&mut self, character: char, image: impl Into<String>) {
        self.characters.entry(character).or_default().image = Some(image.into());
    }

    /// Number of characters with any saved content
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::store_path()?))
    }

    /// Load from an explicit path, tolerating absent or malformed data
    pub fn load_from(path: &Path) -> Self {
        storage::read_json_or_default(path)
    }

    /// Save to the default location.
    ///
    /// Image payloads can be large; the caller downgrades a failed write to
    /// a warning and keeps the in-memory content for the session.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_path()?)
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::write_json(path, self)
    }

    /// Get the store file path
    pub fn store_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("mnemonics.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_and_image_are_independent() {
        let mut store = MnemonicStore::default();
        store.set_story('火', "Sparks leaping beside a waving figure.");

        assert_eq!(store.story('火'), Some("Sparks leaping beside a waving figure."));
        assert_eq!(store.image('火'), None);

        store.set_image('火', "aGVsbG8=");
        assert_eq!(store.image('火'), Some("aGVsbG8="));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn setting_a_story_replaces_the_previous_one() {
        let mut store = MnemonicStore::default();
        store.set_story('木', "First draft.");
        store.set_story('木', "Second draft.");
        assert_eq!(store.story('木'), Some("Second draft."));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mnemonics.json");

        let mut store = MnemonicStore::default();
        store.set_story('山', "Three peaks rising.");
        store.set_image('山', "c29tZSBpbWFnZQ==");
        store.save_to(&path).unwrap();

        let loaded = MnemonicStore::load_from(&path);
        assert_eq!(loaded.story('山'), store.story('山'));
        assert_eq!(loaded.image('山'), store.image('山'));
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mnemonics.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(MnemonicStore::load_from(&path).is_empty());
    }
}
