//! Kanji catalog reference data
//!
//! The catalog is a fixed, ordered sequence of lessons, each holding an
//! ordered sequence of kanji. It is compiled into the binary and never
//! mutated at runtime; all progress and review state reference it by
//! position or by character.

mod genki;

use serde::{Deserialize, Serialize};

use crate::config::progress::UserProgress;

/// A single kanji catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    /// The glyph itself; unique within the catalog
    pub character: char,
    /// Display meaning
    pub meaning: String,
    /// Hiragana reading
    pub hiragana: String,
    /// Romanized reading
    pub romaji: String,
    /// Author-provided default mnemonic story, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

impl KanjiEntry {
    /// Create a new entry without a default mnemonic
    pub fn new(
        character: char,
        meaning: impl Into<String>,
        hiragana: impl Into<String>,
        romaji: impl Into<String>,
    ) -> Self {
        Self {
            character,
            meaning: meaning.into(),
            hiragana: hiragana.into(),
            romaji: romaji.into(),
            mnemonic: None,
        }
    }

    /// Attach a default mnemonic story
    pub fn with_mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.mnemonic = Some(mnemonic.into());
        self
    }
}

/// A lesson: a numbered, titled group of kanji
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson number (1-indexed, for display)
    pub number: usize,
    /// Lesson title
    pub title: String,
    /// Kanji in teaching order
    pub kanji: Vec<KanjiEntry>,
}

impl Lesson {
    /// Create a new lesson
    pub fn new(number: usize, title: impl Into<String>, kanji: Vec<KanjiEntry>) -> Self {
        Self { number, title: title.into(), kanji }
    }
}

/// The full lesson catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Create a catalog from an explicit lesson list
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// The built-in Genki-ordered lesson set
    pub fn builtin() -> Self {
        Self::new(genki::lessons())
    }

    /// All lessons in order
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Number of lessons
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the catalog has no lessons
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Get a lesson by 0-based index
    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    /// Total kanji count across all lessons
    pub fn total_kanji(&self) -> usize {
        self.lessons.iter().map(|l| l.kanji.len()).sum()
    }

    /// Iterate over all kanji in catalog order
    pub fn iter_kanji(&self) -> impl Iterator<Item = &KanjiEntry> {
        self.lessons.iter().flat_map(|l| l.kanji.iter())
    }

    /// Find an entry by its character
    pub fn find(&self, character: char) -> Option<&KanjiEntry> {
        self.iter_kanji().find(|k| k.character == character)
    }

    /// Kanji the learner has completed, in catalog order.
    ///
    /// A kanji is completed iff its lesson precedes `progress.lesson_index`,
    /// or it sits in the lesson at `lesson_index` at a position before
    /// `progress.kanji_index`.
    pub fn completed_kanji(&self, progress: &UserProgress) -> Vec<&KanjiEntry> {
        let mut completed = Vec::new();

        for lesson in self.lessons.iter().take(progress.lesson_index) {
            completed.extend(lesson.kanji.iter());
        }

        if let Some(current) = self.lessons.get(progress.lesson_index) {
            completed.extend(current.kanji.iter().take(progress.kanji_index));
        }

        completed
    }

    /// Entries matching a library search query (case-insensitive substring
    /// over character, meaning, and readings); an empty query matches all
    pub fn search(&self, query: &str) -> Vec<&KanjiEntry> {
        let query = query.trim().to_lowercase();
        self.iter_kanji()
            .filter(|k| {
                query.is_empty()
                    || k.character.to_string().contains(&query)
                    || k.meaning.to_lowercase().contains(&query)
                    || k.hiragana.contains(&query)
                    || k.romaji.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Distinct meanings in catalog order, used as the distractor pool
    pub fn meaning_pool(&self) -> Vec<&str> {
        let mut pool: Vec<&str> = Vec::new();
        for entry in self.iter_kanji() {
            if !pool.contains(&entry.meaning.as_str()) {
                pool.push(&entry.meaning);
            }
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_lesson_catalog() -> Catalog {
        Catalog::new(vec![
            Lesson::new(
                1,
                "First",
                vec![KanjiEntry::new('一', "one", "いち", "ichi"), KanjiEntry::new('二', "two", "に", "ni")],
            ),
            Lesson::new(
                2,
                "Second",
                vec![
                    KanjiEntry::new('三', "three", "さん", "san"),
                    KanjiEntry::new('四', "four", "よん", "yon"),
                    KanjiEntry::new('五', "five", "ご", "go"),
                ],
            ),
        ])
    }

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.total_kanji() > 0);
    }

    #[test]
    fn builtin_characters_are_unique() {
        let catalog = Catalog::builtin();
        let chars: Vec<char> = catalog.iter_kanji().map(|k| k.character).collect();
        let mut deduped = chars.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(chars.len(), deduped.len());
    }

    #[test]
    fn no_progress_means_nothing_completed() {
        let catalog = two_lesson_catalog();
        let progress = UserProgress::default();
        assert!(catalog.completed_kanji(&progress).is_empty());
    }

    #[test]
    fn completed_prefix_spans_lesson_boundary() {
        let catalog = two_lesson_catalog();
        let progress = UserProgress { lesson_index: 1, kanji_index: 1, ..Default::default() };

        let completed = catalog.completed_kanji(&progress);
        let chars: Vec<char> = completed.iter().map(|k| k.character).collect();
        assert_eq!(chars, vec!['一', '二', '三']);
    }

    #[test]
    fn completed_length_matches_progress_cursor() {
        let catalog = two_lesson_catalog();
        let progress = UserProgress { lesson_index: 2, kanji_index: 0, ..Default::default() };
        assert_eq!(catalog.completed_kanji(&progress).len(), catalog.total_kanji());
    }

    #[test]
    fn meaning_pool_is_deduplicated() {
        let mut catalog = two_lesson_catalog();
        catalog.lessons[1].kanji.push(KanjiEntry::new('壱', "one", "いち", "ichi"));

        let pool = catalog.meaning_pool();
        assert_eq!(pool.iter().filter(|m| **m == "one").count(), 1);
    }

    #[test]
    fn search_matches_meaning_and_readings() {
        let catalog = two_lesson_catalog();

        let by_meaning = catalog.search("Four");
        assert_eq!(by_meaning.len(), 1);
        assert_eq!(by_meaning[0].character, '四');

        let by_romaji = catalog.search("ichi");
        assert_eq!(by_romaji.len(), 1);

        assert_eq!(catalog.search("").len(), catalog.total_kanji());
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn find_locates_entry_by_character() {
        let catalog = two_lesson_catalog();
        assert_eq!(catalog.find('四').map(|k| k.meaning.as_str()), Some("four"));
        assert!(catalog.find('火').is_none());
    }
}
