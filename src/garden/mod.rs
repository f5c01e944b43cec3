//! Garden visualization state
//!
//! The garden grows one plant per completed kanji. Only the learner's
//! customizations are persisted here: the background theme and where
//! decorations were placed. The plants themselves are derived from progress
//! at render time.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::storage;

/// Selectable garden backdrop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackgroundTheme {
    #[default]
    Sakura,
    Lake,
    Tokyo,
    Mountain,
    RuralMorning,
}

impl BackgroundTheme {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BackgroundTheme::Sakura => "Sakura",
            BackgroundTheme::Lake => "Lakeside",
            BackgroundTheme::Tokyo => "Tokyo Night",
            BackgroundTheme::Mountain => "Mountains",
            BackgroundTheme::RuralMorning => "Rural Morning",
        }
    }

    /// The next theme in the cycle
    pub fn next(self) -> Self {
        match self {
            BackgroundTheme::Sakura => BackgroundTheme::Lake,
            BackgroundTheme::Lake => BackgroundTheme::Tokyo,
            BackgroundTheme::Tokyo => BackgroundTheme::Mountain,
            BackgroundTheme::Mountain => BackgroundTheme::RuralMorning,
            BackgroundTheme::RuralMorning => BackgroundTheme::Sakura,
        }
    }
}

/// A decoration the learner placed in the garden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Glyph shown for the decoration
    pub glyph: String,
    /// Column within the garden area
    pub x: u16,
    /// Row within the garden area
    pub y: u16,
}

/// Persisted garden customizations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenState {
    /// Selected backdrop
    pub background: BackgroundTheme,
    /// Placed decorations, in placement order
    pub decorations: Vec<Decoration>,
}

impl GardenState {
    /// Cycle to the next background theme
    pub fn cycle_background(&mut self) {
        self.background = self.background.next();
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::garden_path()?))
    }

    /// Load from an explicit path, tolerating absent or malformed data
    pub fn load_from(path: &Path) -> Self {
        storage::read_json_or_default(path)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::garden_path()?)
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::write_json(path, self)
    }

    /// Get the garden file path
    pub fn garden_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("garden.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn background_cycle_visits_every_theme() {
        let mut theme = BackgroundTheme::default();
        let mut seen = vec![theme];
        loop {
            theme = theme.next();
            if theme == BackgroundTheme::default() {
                break;
            }
            seen.push(theme);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn garden_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");

        let mut garden = GardenState::default();
        garden.cycle_background();
        garden.decorations.push(Decoration { glyph: "\u{1F431}".into(), x: 4, y: 2 });
        garden.save_to(&path).unwrap();

        let loaded = GardenState::load_from(&path);
        assert_eq!(loaded.background, BackgroundTheme::Lake);
        assert_eq!(loaded.decorations, garden.decorations);
    }

    #[test]
    fn malformed_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");
        std::fs::write(&path, "{{{{").unwrap();

        let loaded = GardenState::load_from(&path);
        assert_eq!(loaded.background, BackgroundTheme::default());
        assert!(loaded.decorations.is_empty());
    }
}
