//! Learner progress tracking
//!
//! A single `UserProgress` record marks the learner's position in the
//! catalog: how many lessons are fully done, how far into the current
//! lesson they are, and (while a learn session is underway) which
//! pedagogical step to resume at. Every mutation is written to disk
//! immediately by the caller.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::Config;
use crate::catalog::Catalog;
use crate::learn::LearnStep;
use crate::storage;

/// The learner's position in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Fully completed lessons (0-based index into the catalog)
    pub lesson_index: usize,

    /// Completed kanji within the in-progress lesson
    pub kanji_index: usize,

    /// Resume point within the current kanji's learn sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<LearnStep>,
}

impl UserProgress {
    /// The progress after one more kanji is learned.
    ///
    /// Crossing the end of a lesson resets `kanji_index` and bumps
    /// `lesson_index`. Once `lesson_index` reaches the catalog length this
    /// is a no-op: the terminal state is idempotent.
    pub fn advanced(&self, catalog: &Catalog) -> UserProgress {
        let Some(lesson) = catalog.lesson(self.lesson_index) else {
            return self.clone();
        };

        let next_kanji = self.kanji_index + 1;
        if next_kanji < lesson.kanji.len() {
            UserProgress { lesson_index: self.lesson_index, kanji_index: next_kanji, current_step: None }
        } else {
            UserProgress { lesson_index: self.lesson_index + 1, kanji_index: 0, current_step: None }
        }
    }

    /// Whether every lesson in the catalog is completed
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.lesson_index >= catalog.len()
    }

    /// Load progress from the default location
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::progress_path()?))
    }

    /// Load progress from an explicit path; absent or malformed data falls
    /// back to the fresh-install default
    pub fn load_from(path: &Path) -> Self {
        storage::read_json_or_default(path)
    }

    /// Save progress to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::progress_path()?)
    }

    /// Save progress to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::write_json(path, self)
    }

    /// Get the progress file path
    pub fn progress_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("progress.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::{KanjiEntry, Lesson};

    fn catalog_with_shape(lesson_sizes: &[usize]) -> Catalog {
        let mut code = 0x4E00u32; // CJK block start, just needs unique chars
        let lessons = lesson_sizes
            .iter()
            .enumerate()
            .map(|(i, size)| {
                let kanji = (0..*size)
                    .map(|j| {
                        let c = char::from_u32(code).unwrap();
                        code += 1;
                        KanjiEntry::new(c, format!("meaning-{}-{}", i, j), "かな", "kana")
                    })
                    .collect();
                Lesson::new(i + 1, format!("Lesson {}", i + 1), kanji)
            })
            .collect();
        Catalog::new(lessons)
    }

    #[test]
    fn advance_crosses_lesson_boundary() {
        let catalog = catalog_with_shape(&[2]);
        let progress = UserProgress::default();

        let step1 = progress.advanced(&catalog);
        assert_eq!((step1.lesson_index, step1.kanji_index), (0, 1));

        let step2 = step1.advanced(&catalog);
        assert_eq!((step2.lesson_index, step2.kanji_index), (1, 0));

        assert_eq!(catalog.completed_kanji(&step2).len(), 2);
    }

    #[test]
    fn advance_is_idempotent_at_terminal_state() {
        let catalog = catalog_with_shape(&[1, 1]);
        let terminal = UserProgress { lesson_index: 2, kanji_index: 0, ..Default::default() };

        assert_eq!(terminal.advanced(&catalog), terminal);
        assert!(terminal.is_complete(&catalog));
    }

    #[test]
    fn advance_clears_resume_step() {
        let catalog = catalog_with_shape(&[3]);
        let progress = UserProgress {
            lesson_index: 0,
            kanji_index: 0,
            current_step: Some(LearnStep::QuizDraw),
        };

        assert_eq!(progress.advanced(&catalog).current_step, None);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let progress = UserProgress::load_from(&dir.path().join("progress.json"));
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn load_from_malformed_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{\"lesson_index\": \"what\"}").unwrap();

        assert_eq!(UserProgress::load_from(&path), UserProgress::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let progress = UserProgress {
            lesson_index: 3,
            kanji_index: 2,
            current_step: Some(LearnStep::Mnemonic),
        };
        progress.save_to(&path).unwrap();

        assert_eq!(UserProgress::load_from(&path), progress);
    }

    proptest! {
        #[test]
        fn advancing_total_kanji_times_reaches_terminal(
            lesson_sizes in prop::collection::vec(1usize..6, 1..5)
        ) {
            let catalog = catalog_with_shape(&lesson_sizes);
            let total = catalog.total_kanji();

            let mut progress = UserProgress::default();
            for _ in 0..total {
                progress = progress.advanced(&catalog);
            }

            prop_assert_eq!(progress.lesson_index, catalog.len());
            prop_assert_eq!(progress.kanji_index, 0);
            prop_assert!(progress.is_complete(&catalog));

            // Further advances are no-ops
            let again = progress.advanced(&catalog);
            prop_assert_eq!(again, progress);
        }

        #[test]
        fn completed_count_tracks_advances(
            lesson_sizes in prop::collection::vec(1usize..6, 1..5),
            steps in 0usize..30
        ) {
            let catalog = catalog_with_shape(&lesson_sizes);
            let total = catalog.total_kanji();

            let mut progress = UserProgress::default();
            for _ in 0..steps {
                progress = progress.advanced(&catalog);
            }

            prop_assert_eq!(catalog.completed_kanji(&progress).len(), steps.min(total));
        }
    }
}
