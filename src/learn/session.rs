//! The learning session state machine

use super::LearnStep;
use crate::catalog::{Catalog, KanjiEntry, Lesson};
use crate::config::progress::UserProgress;

/// A single learner working through a lesson, one step at a time.
///
/// The session owns a working copy of the progress cursor. After every
/// confirmed transition the caller persists [`LearnSession::snapshot`] so
/// the exact step survives a restart.
#[derive(Debug, Clone)]
pub struct LearnSession {
    progress: UserProgress,
    step: LearnStep,
}

impl LearnSession {
    /// Start or resume a session for the given lesson.
    ///
    /// Opening the lesson the stored progress points at resumes the stored
    /// step; opening any other lesson starts fresh at its first kanji. Only
    /// one lesson's fine-grained resume point is ever retained.
    pub fn start(stored: &UserProgress, lesson_index: usize) -> Self {
        if lesson_index == stored.lesson_index {
            Self {
                progress: UserProgress { current_step: None, ..stored.clone() },
                step: stored.current_step.unwrap_or(LearnStep::SectionStart),
            }
        } else {
            Self {
                progress: UserProgress { lesson_index, kanji_index: 0, current_step: None },
                step: LearnStep::SectionStart,
            }
        }
    }

    /// Current step
    pub fn step(&self) -> LearnStep {
        self.step
    }

    /// Current progress cursor
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// The lesson the session is working through
    pub fn current_lesson<'a>(&self, catalog: &'a Catalog) -> Option<&'a Lesson> {
        catalog.lesson(self.progress.lesson_index)
    }

    /// The kanji the current step refers to
    pub fn current_kanji<'a>(&self, catalog: &'a Catalog) -> Option<&'a KanjiEntry> {
        self.current_lesson(catalog)?.kanji.get(self.progress.kanji_index)
    }

    /// Whether the session has exhausted the catalog
    pub fn is_completed(&self) -> bool {
        self.step == LearnStep::Completed
    }

    /// The progress record to persist: the cursor plus the resume step
    pub fn snapshot(&self) -> UserProgress {
        UserProgress { current_step: Some(self.step), ..self.progress.clone() }
    }

    /// Confirm the current step and move to the next one.
    ///
    /// Confirming `QuizDraw` advances the progress cursor: the next state is
    /// `Intro` within the same lesson, `SectionStart` when a lesson boundary
    /// was crossed, or `Completed` when the catalog is exhausted. Confirming
    /// `Completed` is a no-op.
    pub fn confirm(&mut self, catalog: &Catalog) {
        self.step = match self.step {
            LearnStep::SectionStart => LearnStep::Intro,
            LearnStep::Intro => LearnStep::Trace,
            LearnStep::Trace => LearnStep::Mnemonic,
            LearnStep::Mnemonic => LearnStep::QuizMeaning,
            LearnStep::QuizMeaning => LearnStep::QuizDraw,
            LearnStep::QuizDraw => {
                self.progress = self.progress.advanced(catalog);
                if self.progress.is_complete(catalog) {
                    LearnStep::Completed
                } else if self.progress.kanji_index == 0 {
                    LearnStep::SectionStart
                } else {
                    LearnStep::Intro
                }
            }
            LearnStep::Completed => LearnStep::Completed,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{KanjiEntry, Lesson};

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            Lesson::new(
                1,
                "First",
                vec![KanjiEntry::new('日', "sun", "にち", "nichi"), KanjiEntry::new('月', "moon", "げつ", "getsu")],
            ),
            Lesson::new(2, "Second", vec![KanjiEntry::new('火', "fire", "ひ", "hi")]),
        ])
    }

    fn confirm_through_one_kanji(session: &mut LearnSession, catalog: &Catalog) {
        // Intro → Trace → Mnemonic → QuizMeaning → QuizDraw → advance
        for _ in 0..5 {
            session.confirm(catalog);
        }
    }

    #[test]
    fn steps_follow_the_fixed_sequence() {
        let catalog = small_catalog();
        let mut session = LearnSession::start(&UserProgress::default(), 0);

        let expected = [
            LearnStep::SectionStart,
            LearnStep::Intro,
            LearnStep::Trace,
            LearnStep::Mnemonic,
            LearnStep::QuizMeaning,
            LearnStep::QuizDraw,
        ];
        for step in expected {
            assert_eq!(session.step(), step);
            session.confirm(&catalog);
        }

        // QuizDraw confirmed: second kanji of the same lesson, back at Intro
        assert_eq!(session.step(), LearnStep::Intro);
        assert_eq!(session.progress().kanji_index, 1);
        assert_eq!(session.current_kanji(&catalog).map(|k| k.character), Some('月'));
    }

    #[test]
    fn lesson_boundary_returns_to_section_start() {
        let catalog = small_catalog();
        let mut session = LearnSession::start(&UserProgress::default(), 0);

        session.confirm(&catalog); // SectionStart → Intro
        confirm_through_one_kanji(&mut session, &catalog); // 日 done
        confirm_through_one_kanji(&mut session, &catalog); // 月 done, lesson crossed

        assert_eq!(session.step(), LearnStep::SectionStart);
        assert_eq!(session.progress().lesson_index, 1);
        assert_eq!(session.progress().kanji_index, 0);
    }

    #[test]
    fn exhausting_the_catalog_completes() {
        let catalog = small_catalog();
        let mut session = LearnSession::start(&UserProgress::default(), 0);

        session.confirm(&catalog); // into lesson 1
        confirm_through_one_kanji(&mut session, &catalog);
        confirm_through_one_kanji(&mut session, &catalog);
        session.confirm(&catalog); // into lesson 2
        confirm_through_one_kanji(&mut session, &catalog);

        assert!(session.is_completed());
        assert_eq!(session.progress().lesson_index, catalog.len());

        // Terminal state holds
        session.confirm(&catalog);
        assert!(session.is_completed());
    }

    #[test]
    fn resuming_the_current_lesson_restores_the_step() {
        let stored = UserProgress {
            lesson_index: 0,
            kanji_index: 1,
            current_step: Some(LearnStep::Mnemonic),
        };

        let session = LearnSession::start(&stored, 0);
        assert_eq!(session.step(), LearnStep::Mnemonic);
        assert_eq!(session.progress().kanji_index, 1);
    }

    #[test]
    fn opening_a_different_lesson_starts_fresh() {
        let stored = UserProgress {
            lesson_index: 0,
            kanji_index: 1,
            current_step: Some(LearnStep::QuizMeaning),
        };

        let session = LearnSession::start(&stored, 1);
        assert_eq!(session.step(), LearnStep::SectionStart);
        assert_eq!(session.progress().lesson_index, 1);
        assert_eq!(session.progress().kanji_index, 0);
    }

    #[test]
    fn snapshot_carries_the_resume_step() {
        let catalog = small_catalog();
        let mut session = LearnSession::start(&UserProgress::default(), 0);
        session.confirm(&catalog);
        session.confirm(&catalog);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_step, Some(LearnStep::Trace));
        assert_eq!(snapshot.lesson_index, 0);
        assert_eq!(snapshot.kanji_index, 0);
    }
}
