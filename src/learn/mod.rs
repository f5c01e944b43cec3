//! Lesson-based learning flow
//!
//! Each kanji is taught through a fixed sequence of steps; a session walks
//! that sequence across a lesson and hands the progress cursor forward when
//! a kanji's final step is confirmed.

mod session;

pub use session::LearnSession;

use serde::{Deserialize, Serialize};

/// A step in the per-kanji pedagogical sequence.
///
/// Strictly linear: `SectionStart → Intro → Trace → Mnemonic → QuizMeaning
/// → QuizDraw`, then the progress cursor advances. `Completed` is the
/// terminal state once the final kanji of the final lesson is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearnStep {
    /// Lesson title card, shown once at lesson entry
    SectionStart,
    /// Character, meaning, and readings
    Intro,
    /// Writing practice over the reference glyph; no correctness check
    Trace,
    /// Mnemonic story, optionally AI-generated
    Mnemonic,
    /// Single-attempt four-option meaning quiz
    QuizMeaning,
    /// Free recall: write, reveal, confirm
    QuizDraw,
    /// Every lesson finished
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&LearnStep::SectionStart).unwrap();
        assert_eq!(json, "\"SECTION_START\"");

        let step: LearnStep = serde_json::from_str("\"QUIZ_MEANING\"").unwrap();
        assert_eq!(step, LearnStep::QuizMeaning);
    }
}
