//! A bounded run of the daily review quiz

use rand::Rng;

use super::history::ReviewHistory;
use super::planner::{self, PlanError, QuizItem};
use crate::catalog::Catalog;
use crate::config::progress::UserProgress;

/// Final tally reported when the queue is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
}

impl SessionSummary {
    /// Accuracy as a 0-100 percentage, rounded
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// An in-flight daily review session.
///
/// The session owns the planned queue and cursor; recording attempts into
/// [`ReviewHistory`] and persisting is left to the caller so all I/O stays
/// at the boundary.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    queue: Vec<QuizItem>,
    cursor: usize,
    correct: usize,
}

impl ReviewSession {
    /// Plan a new session; fails before any state mutation if nothing is
    /// completed yet
    pub fn plan(
        catalog: &Catalog,
        progress: &UserProgress,
        history: &ReviewHistory,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Result<Self, PlanError> {
        let queue = planner::plan_queue(catalog, progress, history, now_ms, rng)?;
        Ok(Self { queue, cursor: 0, correct: 0 })
    }

    /// The item awaiting an answer, if any remain
    pub fn current(&self) -> Option<&QuizItem> {
        self.queue.get(self.cursor)
    }

    /// 0-based position of the current item
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total queue length
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty (never true for a planned session)
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether every item has been resolved
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Resolve the current item and advance the cursor.
    ///
    /// Returns the resolved character so the caller can append the attempt
    /// to the review history and persist it immediately. Returns `None` if
    /// the session is already finished.
    pub fn resolve_current(&mut self, correct: bool) -> Option<char> {
        let item = self.queue.get(self.cursor)?;
        let character = item.kanji.character;

        if correct {
            self.correct += 1;
        }
        self.cursor += 1;

        Some(character)
    }

    /// The running (or final) tally
    pub fn summary(&self) -> SessionSummary {
        SessionSummary { correct: self.correct, total: self.cursor }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::{KanjiEntry, Lesson};
    use crate::review::history::Attempt;

    fn planned_session() -> (Catalog, ReviewSession) {
        let catalog = Catalog::new(vec![Lesson::new(
            1,
            "Only",
            vec![
                KanjiEntry::new('一', "one", "いち", "ichi"),
                KanjiEntry::new('二', "two", "に", "ni"),
                KanjiEntry::new('三', "three", "さん", "san"),
            ],
        )]);
        let progress = UserProgress { lesson_index: 1, kanji_index: 0, ..Default::default() };
        let history = ReviewHistory::default();
        let mut rng = StdRng::seed_from_u64(7);

        let session = ReviewSession::plan(&catalog, &progress, &history, 0, &mut rng).unwrap();
        (catalog, session)
    }

    #[test]
    fn resolving_walks_the_queue_and_tallies() {
        let (_, mut session) = planned_session();
        assert_eq!(session.len(), 3);
        assert!(!session.is_finished());

        let first = session.resolve_current(true).unwrap();
        assert_eq!(first, '一');
        let _ = session.resolve_current(false).unwrap();
        let _ = session.resolve_current(true).unwrap();

        assert!(session.is_finished());
        assert_eq!(session.current(), None);
        assert_eq!(session.summary(), SessionSummary { correct: 2, total: 3 });
        assert_eq!(session.summary().accuracy_percent(), 67);
    }

    #[test]
    fn resolving_past_the_end_is_a_no_op() {
        let (_, mut session) = planned_session();
        for _ in 0..3 {
            session.resolve_current(true);
        }

        assert_eq!(session.resolve_current(true), None);
        assert_eq!(session.summary(), SessionSummary { correct: 3, total: 3 });
    }

    #[test]
    fn caller_records_each_resolution_into_history() {
        let (_, mut session) = planned_session();
        let mut history = ReviewHistory::default();

        while let Some(item) = session.current() {
            let character = item.kanji.character;
            let resolved = session.resolve_current(false).unwrap();
            assert_eq!(resolved, character);
            history.record(resolved, Attempt::new(1_000, false));
        }

        assert_eq!(history.total_attempts(), 3);
        assert_eq!(history.attempts('二').len(), 1);
    }
}
