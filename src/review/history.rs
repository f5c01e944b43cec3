//! Per-character review history
//!
//! Append-only attempt records keyed by character. Entries exist only for
//! characters that have been quizzed at least once; nothing ever reorders or
//! truncates a history list.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::storage;

/// One week in milliseconds
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;
/// Thirty days in milliseconds
pub const MONTH_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// A single quiz attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// When the attempt was resolved (ms since epoch)
    pub timestamp_ms: i64,
    /// Whether the learner got it right
    pub correct: bool,
}

impl Attempt {
    /// Create an attempt with an explicit timestamp
    pub fn new(timestamp_ms: i64, correct: bool) -> Self {
        Self { timestamp_ms, correct }
    }

    /// Create an attempt stamped with the current time
    pub fn now(correct: bool) -> Self {
        Self::new(now_ms(), correct)
    }
}

/// All attempt records, keyed by character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewHistory {
    characters: HashMap<char, Vec<Attempt>>,
}

impl ReviewHistory {
    /// Append one attempt to a character's history
    pub fn record(&mut self, character: char, attempt: Attempt) {
        self.characters.entry(character).or_default().push(attempt);
    }

    /// All attempts for a character, in occurrence order
    pub fn attempts(&self, character: char) -> &[Attempt] {
        self.characters.get(&character).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Incorrect attempts within the last seven days
    pub fn mistakes_last_week(&self, character: char, now_ms: i64) -> usize {
        self.attempts(character)
            .iter()
            .filter(|a| !a.correct && now_ms - a.timestamp_ms < WEEK_MS)
            .count()
    }

    /// Attempts (correct or not) within the last thirty days
    pub fn quizzed_last_30_days(&self, character: char, now_ms: i64) -> usize {
        self.attempts(character).iter().filter(|a| now_ms - a.timestamp_ms < MONTH_MS).count()
    }

    /// Total attempts across all characters
    pub fn total_attempts(&self) -> usize {
        self.characters.values().map(|v| v.len()).sum()
    }

    /// Lifetime accuracy for a character, if it was ever quizzed
    pub fn accuracy(&self, character: char) -> Option<f32> {
        let attempts = self.attempts(character);
        if attempts.is_empty() {
            return None;
        }
        let correct = attempts.iter().filter(|a| a.correct).count();
        Some(correct as f32 / attempts.len() as f32)
    }

    /// Load history from the default location
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::history_path()?))
    }

    /// Load history from an explicit path, tolerating absent or malformed
    /// data
    pub fn load_from(path: &Path) -> Self {
        storage::read_json_or_default(path)
    }

    /// Save history to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::history_path()?)
    }

    /// Save history to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::write_json(path, self)
    }

    /// Get the history file path
    pub fn history_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("review_history.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn record_appends_exactly_one_entry() {
        let mut history = ReviewHistory::default();

        history.record('火', Attempt::new(100, false));
        assert_eq!(history.attempts('火').len(), 1);

        history.record('火', Attempt::new(200, true));
        let attempts = history.attempts('火');
        assert_eq!(attempts.len(), 2);
        // Prior entries untouched, order preserved
        assert_eq!(attempts[0], Attempt::new(100, false));
        assert_eq!(attempts[1], Attempt::new(200, true));
    }

    #[test]
    fn unquizzed_character_has_empty_history() {
        let history = ReviewHistory::default();
        assert!(history.attempts('水').is_empty());
        assert_eq!(history.accuracy('水'), None);
    }

    #[test]
    fn window_queries_filter_by_age_and_correctness() {
        let now = 100 * DAY_MS;
        let mut history = ReviewHistory::default();
        history.record('火', Attempt::new(now - DAY_MS, false)); // recent miss
        history.record('火', Attempt::new(now - 10 * DAY_MS, false)); // old miss
        history.record('火', Attempt::new(now - 2 * DAY_MS, true)); // recent hit
        history.record('火', Attempt::new(now - 40 * DAY_MS, true)); // ancient

        assert_eq!(history.mistakes_last_week('火', now), 1);
        assert_eq!(history.quizzed_last_30_days('火', now), 3);
    }

    #[test]
    fn accuracy_is_correct_fraction() {
        let mut history = ReviewHistory::default();
        history.record('日', Attempt::new(0, true));
        history.record('日', Attempt::new(1, true));
        history.record('日', Attempt::new(2, false));

        let accuracy = history.accuracy('日').unwrap();
        assert!((accuracy - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn save_then_load_preserves_ordered_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review_history.json");

        let mut history = ReviewHistory::default();
        history.record('金', Attempt::new(10, false));
        history.record('金', Attempt::new(20, true));
        history.record('土', Attempt::new(30, true));
        history.save_to(&path).unwrap();

        let loaded = ReviewHistory::load_from(&path);
        assert_eq!(loaded.attempts('金'), history.attempts('金'));
        assert_eq!(loaded.attempts('土'), history.attempts('土'));
        assert_eq!(loaded.total_attempts(), 3);
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review_history.json");
        std::fs::write(&path, "[1,2,3]").unwrap();

        let loaded = ReviewHistory::load_from(&path);
        assert_eq!(loaded.total_attempts(), 0);
    }
}
