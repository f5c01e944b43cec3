//! Application state definitions

use std::collections::HashSet;

use crate::learn::LearnSession;
use crate::review::{FlashcardSession, ReviewSession, SessionSummary};

/// Which tab is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Garden,
    Learn,
    Library,
    Review,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Garden, Tab::Learn, Tab::Library, Tab::Review];

    /// Tab bar title
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Garden => "Garden",
            Tab::Learn => "Learn",
            Tab::Library => "Library",
            Tab::Review => "Review",
        }
    }

    /// The tab to the right, wrapping
    pub fn next(self) -> Self {
        match self {
            Tab::Garden => Tab::Learn,
            Tab::Learn => Tab::Library,
            Tab::Library => Tab::Review,
            Tab::Review => Tab::Garden,
        }
    }

    /// The tab to the left, wrapping
    pub fn prev(self) -> Self {
        match self {
            Tab::Garden => Tab::Review,
            Tab::Learn => Tab::Garden,
            Tab::Library => Tab::Learn,
            Tab::Review => Tab::Library,
        }
    }

    /// Index in [`Tab::ALL`]
    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Cursor and answer state for one quiz item or quiz step
#[derive(Debug, Clone, Default)]
pub struct QuizInteraction {
    /// Highlighted option index
    pub selected: usize,
    /// Locked-in answer, if any (selection is final once made)
    pub chosen: Option<usize>,
    /// Whether the locked answer was correct
    pub was_correct: Option<bool>,
    /// Whether the reference glyph is revealed (draw questions)
    pub revealed: bool,
}

impl QuizInteraction {
    /// Clear everything for the next item
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the highlight up
    pub fn move_up(&mut self) {
        if self.chosen.is_none() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Move the highlight down, clamped to the option count
    pub fn move_down(&mut self, option_count: usize) {
        if self.chosen.is_none() && self.selected + 1 < option_count {
            self.selected += 1;
        }
    }

    /// Whether an answer is locked in
    pub fn is_locked(&self) -> bool {
        self.chosen.is_some()
    }
}

/// Which view the Learn tab shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LearnView {
    #[default]
    LessonList,
    Session,
}

/// State for the Learn tab
#[derive(Debug, Default)]
pub struct LearnTabState {
    /// Current view
    pub view: LearnView,
    /// Highlighted lesson in the list
    pub selected_lesson: usize,
    /// In-flight session, present while `view == Session`
    pub session: Option<LearnSession>,
    /// Meaning-quiz options for the current kanji's quiz step
    pub quiz_options: Vec<String>,
    /// Cursor/answer state for the current step
    pub interaction: QuizInteraction,
    /// Working mnemonic story for the current kanji
    pub story: Option<String>,
    /// A story generation request is in flight
    pub story_pending: bool,
    /// An illustration request is in flight
    pub image_pending: bool,
}

impl LearnTabState {
    /// Clear per-step state when moving between steps
    pub fn reset_step_state(&mut self) {
        self.quiz_options.clear();
        self.interaction.reset();
    }

    /// Clear per-kanji state when the progress cursor advances
    pub fn reset_kanji_state(&mut self) {
        self.reset_step_state();
        self.story = None;
        self.story_pending = false;
        self.image_pending = false;
    }
}

/// Review tab phase
#[derive(Debug)]
pub enum ReviewPhase {
    /// Mode menu: daily review or flashcards
    Menu { selected: usize },
    /// Daily review start screen
    DailyStart,
    /// Daily quiz in progress
    Quiz { session: ReviewSession, interaction: QuizInteraction },
    /// Daily quiz finished
    Summary { summary: SessionSummary },
    /// Picking cards for a flashcard deck
    FlashcardSelect { selected: HashSet<char>, cursor: usize },
    /// Flashcard deck in progress
    FlashcardPlay { session: FlashcardSession, flipped: bool },
    /// Flashcard deck exhausted
    FlashcardComplete { total: usize },
}

impl Default for ReviewPhase {
    fn default() -> Self {
        ReviewPhase::Menu { selected: 0 }
    }
}

/// State for the Library tab
#[derive(Debug, Default)]
pub struct LibraryState {
    /// Search query
    pub query: String,
    /// Whether keystrokes go into the query
    pub searching: bool,
    /// Highlighted entry in the filtered list
    pub selected: usize,
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current tab
    pub tab: Tab,

    /// Learn tab state
    pub learn: LearnTabState,

    /// Review tab phase
    pub review: ReviewPhase,

    /// Library tab state
    pub library: LibraryState,

    /// One-line status message shown in the footer
    pub status: Option<String>,
}
