//! Review pipeline: history, daily session planning, and flashcards
//!
//! The daily review quiz draws on everything the learner has completed,
//! weighted toward recent mistakes and rarely-reviewed characters. The
//! flashcard deck is a separate, unscored study loop that never touches the
//! review history.

pub mod flashcards;
pub mod history;
pub mod planner;
pub mod session;

pub use flashcards::FlashcardSession;
pub use history::{Attempt, ReviewHistory};
pub use planner::{PlanError, QuestionType, QuizItem};
pub use session::{ReviewSession, SessionSummary};
