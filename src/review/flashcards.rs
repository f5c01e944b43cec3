//! Free-study flashcard deck
//!
//! Independent of the scored review pipeline: a learner-selected set of
//! completed kanji, shuffled once, with re-queue-on-miss. Results are never
//! written to the review history.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::catalog::KanjiEntry;

/// Why a deck could not be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The learner selected no cards
    #[error("no cards selected")]
    EmptySelection,
}

/// An in-flight flashcard session.
///
/// The queue grows as cards are marked for re-review; the session ends when
/// the cursor catches up with the (possibly grown) queue.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    queue: Vec<KanjiEntry>,
    cursor: usize,
}

impl FlashcardSession {
    /// Build a deck from the learner's selection, shuffled into random order
    pub fn new(mut selection: Vec<KanjiEntry>, rng: &mut impl Rng) -> Result<Self, DeckError> {
        if selection.is_empty() {
            return Err(DeckError::EmptySelection);
        }
        selection.shuffle(rng);
        Ok(Self { queue: selection, cursor: 0 })
    }

    /// The card currently shown, if any remain
    pub fn current(&self) -> Option<&KanjiEntry> {
        self.queue.get(self.cursor)
    }

    /// 0-based position of the current card
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total cards in the queue, including re-queued copies
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue can ever be empty (it cannot for a built deck)
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether every card has been dismissed
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Dismiss the current card for good
    pub fn mark_learned(&mut self) {
        if self.cursor < self.queue.len() {
            self.cursor += 1;
        }
    }

    /// Push a copy of the current card to the end of the queue so it
    /// resurfaces later in the same session, then move on
    pub fn review_again(&mut self) {
        if let Some(card) = self.queue.get(self.cursor).cloned() {
            self.queue.push(card);
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn cards() -> Vec<KanjiEntry> {
        vec![
            KanjiEntry::new('山', "mountain", "やま", "yama"),
            KanjiEntry::new('川', "river", "かわ", "kawa"),
        ]
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = FlashcardSession::new(Vec::new(), &mut rng);
        assert_eq!(result.unwrap_err(), DeckError::EmptySelection);
    }

    #[test]
    fn marking_every_card_learned_finishes_the_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = FlashcardSession::new(cards(), &mut rng).unwrap();

        assert!(session.current().is_some());
        session.mark_learned();
        session.mark_learned();

        assert!(session.is_finished());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn review_again_on_last_card_extends_the_session() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = FlashcardSession::new(cards(), &mut rng).unwrap();

        session.mark_learned();
        let last = session.current().unwrap().character;
        let len_before = session.len();

        session.review_again();
        assert_eq!(session.len(), len_before + 1);
        assert!(!session.is_finished());
        assert_eq!(session.current().unwrap().character, last);

        session.mark_learned();
        assert!(session.is_finished());
    }

    #[test]
    fn deck_contains_the_whole_selection() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = FlashcardSession::new(cards(), &mut rng).unwrap();

        let mut seen = Vec::new();
        while let Some(card) = session.current() {
            seen.push(card.character);
            session.mark_learned();
        }
        seen.sort();
        assert_eq!(seen, vec!['山', '川']);
    }
}
