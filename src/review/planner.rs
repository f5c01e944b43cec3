//! Daily review session planning
//!
//! Selects which completed kanji to quiz today and builds the quiz items.
//! The plan is deterministic given the history, the clock, and the random
//! source; callers inject the rng so tests can pin the outcome.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::history::ReviewHistory;
use crate::catalog::{Catalog, KanjiEntry};
use crate::config::progress::UserProgress;

/// Daily session cap
pub const SESSION_CAP: usize = 10;
/// Options shown for a meaning question
pub const OPTION_COUNT: usize = 4;

/// Recent mistakes dominate the priority score
const MISTAKE_WEIGHT: i64 = 100;
/// Frequent recent review slightly suppresses priority
const RECENCY_WEIGHT: i64 = 1;

/// How a quiz item is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Pick the meaning from four options
    Meaning,
    /// Write the character from its meaning, then self-grade
    Draw,
}

/// One question in a review session; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    /// The kanji under review
    pub kanji: KanjiEntry,
    /// Question style
    pub question: QuestionType,
    /// Meaning options, present only for [`QuestionType::Meaning`]
    pub options: Option<Vec<String>>,
}

/// Why a session could not be planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// No kanji completed yet
    #[error("nothing to review yet; complete a lesson first")]
    NothingToReview,
}

/// Priority score for one character.
///
/// `mistakes_last_week * 100 - quizzed_last_30_days`: recent mistakes should
/// resurface quickly, while an already-solid character reviewed often in the
/// last month yields its slot to something staler.
pub fn score(history: &ReviewHistory, character: char, now_ms: i64) -> i64 {
    history.mistakes_last_week(character, now_ms) as i64 * MISTAKE_WEIGHT
        - history.quizzed_last_30_days(character, now_ms) as i64 * RECENCY_WEIGHT
}

/// Plan the daily queue: highest-priority completed kanji first, capped at
/// [`SESSION_CAP`] items.
pub fn plan_queue(
    catalog: &Catalog,
    progress: &UserProgress,
    history: &ReviewHistory,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<Vec<QuizItem>, PlanError> {
    let completed = catalog.completed_kanji(progress);
    if completed.is_empty() {
        return Err(PlanError::NothingToReview);
    }

    let mut scored: Vec<(&KanjiEntry, i64)> =
        completed.into_iter().map(|k| (k, score(history, k.character, now_ms))).collect();
    // Stable sort: ties keep catalog order
    scored.sort_by_key(|(_, s)| std::cmp::Reverse(*s));

    let queue = scored
        .into_iter()
        .take(SESSION_CAP)
        .map(|(kanji, _)| {
            let question = if rng.gen_bool(0.5) { QuestionType::Meaning } else { QuestionType::Draw };
            let options = match question {
                QuestionType::Meaning => Some(meaning_options(catalog, kanji, rng)),
                QuestionType::Draw => None,
            };
            QuizItem { kanji: kanji.clone(), question, options }
        })
        .collect();

    Ok(queue)
}

/// Build the option set for a meaning question: the correct meaning plus up
/// to three distinct distractors drawn without replacement from the catalog
/// pool, shuffled into display order.
///
/// A catalog with fewer than four distinct meanings degrades to whatever is
/// available; the target always appears exactly once and no meaning is ever
/// shown twice.
pub fn meaning_options(catalog: &Catalog, target: &KanjiEntry, rng: &mut impl Rng) -> Vec<String> {
    let pool: Vec<&str> =
        catalog.meaning_pool().into_iter().filter(|m| *m != target.meaning).collect();

    let mut options: Vec<String> =
        pool.choose_multiple(rng, OPTION_COUNT - 1).map(|m| m.to_string()).collect();
    options.push(target.meaning.clone());
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::Lesson;
    use crate::review::history::Attempt;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn catalog_of(chars: &[(char, &str)]) -> Catalog {
        let kanji = chars
            .iter()
            .map(|(c, m)| KanjiEntry::new(*c, m.to_string(), "かな", "kana"))
            .collect();
        Catalog::new(vec![Lesson::new(1, "Only", kanji)])
    }

    fn all_completed(catalog: &Catalog) -> UserProgress {
        UserProgress { lesson_index: catalog.len(), kanji_index: 0, ..Default::default() }
    }

    #[test]
    fn empty_completed_set_is_rejected() {
        let catalog = catalog_of(&[('一', "one")]);
        let history = ReviewHistory::default();
        let mut rng = StdRng::seed_from_u64(0);

        let result =
            plan_queue(&catalog, &UserProgress::default(), &history, 0, &mut rng);
        assert_eq!(result.unwrap_err(), PlanError::NothingToReview);
    }

    #[test]
    fn queue_length_is_min_of_cap_and_completed() {
        let entries: Vec<(char, String)> = ('a'..='l')
            .enumerate()
            .map(|(i, c)| (char::from_u32(0x4E00 + i as u32).unwrap(), c.to_string()))
            .collect();
        let refs: Vec<(char, &str)> = entries.iter().map(|(c, m)| (*c, m.as_str())).collect();
        let catalog = catalog_of(&refs);

        let history = ReviewHistory::default();
        let mut rng = StdRng::seed_from_u64(1);

        let queue =
            plan_queue(&catalog, &all_completed(&catalog), &history, 0, &mut rng).unwrap();
        assert_eq!(queue.len(), SESSION_CAP);

        let small = catalog_of(&[('一', "one"), ('二', "two")]);
        let queue = plan_queue(&small, &all_completed(&small), &history, 0, &mut rng).unwrap();
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn score_weighs_mistakes_over_recency() {
        let now = 100 * DAY_MS;
        let mut history = ReviewHistory::default();

        // One mistake a day ago: counts in both windows
        history.record('火', Attempt::new(now - DAY_MS, false));
        assert_eq!(score(&history, '火', now), 99);

        // Each further mistake adds exactly 100 - 1
        history.record('火', Attempt::new(now - DAY_MS, false));
        assert_eq!(score(&history, '火', now), 198);

        // A correct recent answer subtracts exactly 1
        history.record('火', Attempt::new(now - 2 * DAY_MS, true));
        assert_eq!(score(&history, '火', now), 197);
    }

    #[test]
    fn highest_priority_characters_come_first() {
        let catalog = catalog_of(&[('一', "one"), ('二', "two"), ('三', "three")]);
        let now = 100 * DAY_MS;

        let mut history = ReviewHistory::default();
        // 三 missed recently, 一 reviewed a lot, 二 untouched
        history.record('三', Attempt::new(now - DAY_MS, false));
        for _ in 0..5 {
            history.record('一', Attempt::new(now - 3 * DAY_MS, true));
        }

        let mut rng = StdRng::seed_from_u64(2);
        let queue =
            plan_queue(&catalog, &all_completed(&catalog), &history, now, &mut rng).unwrap();

        let order: Vec<char> = queue.iter().map(|q| q.kanji.character).collect();
        assert_eq!(order, vec!['三', '二', '一']);
    }

    #[test]
    fn tied_scores_keep_catalog_order() {
        let catalog = catalog_of(&[('一', "one"), ('二', "two"), ('三', "three")]);
        let history = ReviewHistory::default();
        let mut rng = StdRng::seed_from_u64(3);

        let queue =
            plan_queue(&catalog, &all_completed(&catalog), &history, 0, &mut rng).unwrap();
        let order: Vec<char> = queue.iter().map(|q| q.kanji.character).collect();
        assert_eq!(order, vec!['一', '二', '三']);
    }

    #[test]
    fn meaning_options_contain_target_exactly_once() {
        let catalog = catalog_of(&[
            ('一', "one"),
            ('二', "two"),
            ('三', "three"),
            ('四', "four"),
            ('五', "five"),
        ]);
        let target = catalog.find('三').unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..20 {
            let options = meaning_options(&catalog, target, &mut rng);
            assert_eq!(options.len(), OPTION_COUNT);
            assert_eq!(options.iter().filter(|o| *o == "three").count(), 1);

            let mut deduped = options.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), options.len());
        }
    }

    #[test]
    fn meaning_options_degrade_with_a_tiny_pool() {
        let catalog = catalog_of(&[('一', "one"), ('二', "two")]);
        let target = catalog.find('一').unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let options = meaning_options(&catalog, target, &mut rng);
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"one".to_string()));
        assert!(options.contains(&"two".to_string()));
    }

    #[test]
    fn meaning_items_carry_options_draw_items_do_not() {
        let catalog = catalog_of(&[
            ('一', "one"),
            ('二', "two"),
            ('三', "three"),
            ('四', "four"),
            ('五', "five"),
        ]);
        let history = ReviewHistory::default();
        let mut rng = StdRng::seed_from_u64(6);

        let queue =
            plan_queue(&catalog, &all_completed(&catalog), &history, 0, &mut rng).unwrap();
        for item in &queue {
            match item.question {
                QuestionType::Meaning => {
                    let options = item.options.as_ref().expect("meaning item has options");
                    assert!(options.contains(&item.kanji.meaning));
                }
                QuestionType::Draw => assert!(item.options.is_none()),
            }
        }
    }
}
