//! Keyboard input handling

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::KeyCode;
use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{LearnView, QuizInteraction, ReviewPhase, Tab};
use super::{App, GenEvent};
use crate::catalog::KanjiEntry;
use crate::garden::Decoration;
use crate::learn::{LearnSession, LearnStep};
use crate::review::history::{self, Attempt};
use crate::review::planner::{self, QuestionType};
use crate::review::{FlashcardSession, ReviewSession};

/// Glyphs available for garden decorations
const DECORATION_GLYPHS: [&str; 6] = ["⛩", "🏮", "🪨", "🌸", "🦢", "🍵"];

impl App {
    /// Handle a key press. Returns `Ok(true)` if the app should exit.
    pub async fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        self.state.status = None;

        // Search mode captures everything, including 'q'
        if self.state.tab == Tab::Library && self.state.library.searching {
            self.handle_library_search_key(key);
            return Ok(false);
        }

        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab => self.state.tab = self.state.tab.next(),
            KeyCode::BackTab => self.state.tab = self.state.tab.prev(),
            _ => match self.state.tab {
                Tab::Garden => self.handle_garden_key(key),
                Tab::Learn => self.handle_learn_key(key),
                Tab::Library => self.handle_library_key(key),
                Tab::Review => self.handle_review_key(key),
            },
        }

        Ok(false)
    }

    // ----- Garden -----

    fn handle_garden_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('b') => {
                self.garden.cycle_background();
                self.state.status =
                    Some(format!("Background: {}", self.garden.background.label()));
                if let Err(e) = self.garden.save() {
                    tracing::warn!("Could not persist garden: {}", e);
                }
            }
            KeyCode::Char('d') => self.place_decoration(),
            _ => {}
        }
    }

    fn place_decoration(&mut self) {
        let glyph = DECORATION_GLYPHS.choose(&mut self.rng).copied().unwrap_or("🏮");
        let x = self.rng.gen_range(2..70u16);
        let y = self.rng.gen_range(2..14u16);
        self.garden.decorations.push(Decoration { glyph: glyph.to_string(), x, y });
        if let Err(e) = self.garden.save() {
            tracing::warn!("Could not persist garden: {}", e);
        }
    }

    // ----- Learn -----

    fn handle_learn_key(&mut self, key: KeyCode) {
        match self.state.learn.view {
            LearnView::LessonList => match key {
                KeyCode::Char('j') | KeyCode::Down => {
                    if self.state.learn.selected_lesson + 1 < self.catalog.len() {
                        self.state.learn.selected_lesson += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.state.learn.selected_lesson =
                        self.state.learn.selected_lesson.saturating_sub(1);
                }
                KeyCode::Enter => self.open_lesson(self.state.learn.selected_lesson),
                _ => {}
            },
            LearnView::Session => self.handle_learn_session_key(key),
        }
    }

    /// Start or resume a session for the chosen lesson.
    ///
    /// Opening a lesson other than the stored one resets the cursor to its
    /// first kanji, and that reset is saved immediately.
    fn open_lesson(&mut self, lesson_index: usize) {
        if lesson_index >= self.catalog.len() {
            return;
        }
        self.state.learn.session = Some(LearnSession::start(&self.progress, lesson_index));
        self.state.learn.view = LearnView::Session;
        self.state.learn.reset_kanji_state();
        self.prepare_learn_step();
        self.persist_learn_session();
    }

    fn handle_learn_session_key(&mut self, key: KeyCode) {
        let Some(step) = self.state.learn.session.as_ref().map(|s| s.step()) else {
            return;
        };

        match key {
            KeyCode::Esc => self.close_learn_session(),
            KeyCode::Char('j') | KeyCode::Down if step == LearnStep::QuizMeaning => {
                let count = self.state.learn.quiz_options.len();
                self.state.learn.interaction.move_down(count);
            }
            KeyCode::Char('k') | KeyCode::Up if step == LearnStep::QuizMeaning => {
                self.state.learn.interaction.move_up();
            }
            KeyCode::Char('g') if step == LearnStep::Mnemonic => self.spawn_story_generation(),
            KeyCode::Char('v') if step == LearnStep::Mnemonic => self.spawn_visualization(),
            KeyCode::Enter => self.confirm_learn_step(step),
            _ => {}
        }
    }

    fn close_learn_session(&mut self) {
        self.state.learn.view = LearnView::LessonList;
        self.state.learn.session = None;
        self.state.learn.reset_kanji_state();
    }

    /// Confirm the current learn step. Quiz steps need two confirmations:
    /// one to lock or reveal the answer, one to move on.
    fn confirm_learn_step(&mut self, step: LearnStep) {
        match step {
            LearnStep::QuizMeaning if !self.state.learn.interaction.is_locked() => {
                let selected = self.state.learn.interaction.selected;
                let Some(answer) = self.state.learn.quiz_options.get(selected).cloned() else {
                    return;
                };
                let correct = self
                    .state
                    .learn
                    .session
                    .as_ref()
                    .and_then(|s| s.current_kanji(&self.catalog))
                    .is_some_and(|k| k.meaning == answer);
                self.state.learn.interaction.chosen = Some(selected);
                self.state.learn.interaction.was_correct = Some(correct);
                return;
            }
            LearnStep::QuizDraw if !self.state.learn.interaction.revealed => {
                self.state.learn.interaction.revealed = true;
                return;
            }
            LearnStep::Mnemonic => {
                // Keep the working story before moving on
                if let (Some(story), Some(character)) =
                    (self.state.learn.story.clone(), self.current_learn_character())
                {
                    self.mnemonics.set_story(character, story);
                    if let Err(e) = self.mnemonics.save() {
                        tracing::warn!("Could not persist mnemonic: {}", e);
                    }
                }
            }
            LearnStep::Completed => {
                self.close_learn_session();
                return;
            }
            _ => {}
        }

        let advanced = {
            let Some(session) = self.state.learn.session.as_mut() else {
                return;
            };
            let before = session.progress().clone();
            session.confirm(&self.catalog);
            *session.progress() != before
        };

        if advanced {
            self.state.learn.reset_kanji_state();
        }
        self.prepare_learn_step();
        self.persist_learn_session();
    }

    /// Set up per-step state after entering a step: the working story for
    /// the mnemonic step, the option set for the meaning quiz
    fn prepare_learn_step(&mut self) {
        self.state.learn.reset_step_state();
        let Some(session) = &self.state.learn.session else {
            return;
        };
        let step = session.step();
        let Some(kanji) = session.current_kanji(&self.catalog) else {
            return;
        };

        match step {
            LearnStep::Mnemonic => {
                if self.state.learn.story.is_none() {
                    self.state.learn.story = self
                        .mnemonics
                        .story(kanji.character)
                        .map(str::to_string)
                        .or_else(|| kanji.mnemonic.clone());
                }
            }
            LearnStep::QuizMeaning => {
                self.state.learn.quiz_options =
                    planner::meaning_options(&self.catalog, kanji, &mut self.rng);
            }
            _ => {}
        }
    }

    fn current_learn_character(&self) -> Option<char> {
        self.state.learn.session.as_ref()?.current_kanji(&self.catalog).map(|k| k.character)
    }

    fn spawn_story_generation(&mut self) {
        if self.state.learn.story_pending {
            return;
        }
        let Some(session) = &self.state.learn.session else {
            return;
        };
        let Some(kanji) = session.current_kanji(&self.catalog) else {
            return;
        };

        let character = kanji.character;
        let meaning = kanji.meaning.clone();
        let default_mnemonic = kanji.mnemonic.clone();
        let generator = Arc::clone(&self.generator);
        let tx = self.gen_tx.clone();

        self.state.learn.story_pending = true;
        tokio::spawn(async move {
            let story = generator
                .generate_mnemonic(character, &meaning, &[], default_mnemonic.as_deref())
                .await;
            let _ = tx.send(GenEvent::Story { character, story });
        });
    }

    fn spawn_visualization(&mut self) {
        if self.state.learn.image_pending {
            return;
        }
        let Some(character) = self.current_learn_character() else {
            return;
        };
        let Some(story) = self.state.learn.story.clone() else {
            self.state.status = Some("Generate or write a story first".to_string());
            return;
        };

        let reference = self.mnemonics.image(character).map(str::to_string);
        let generator = Arc::clone(&self.generator);
        let tx = self.gen_tx.clone();

        self.state.learn.image_pending = true;
        tokio::spawn(async move {
            let image =
                generator.generate_visualization(character, &story, reference.as_deref()).await;
            let _ = tx.send(GenEvent::Image { character, image });
        });
    }

    // ----- Library -----

    fn handle_library_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('/') => self.state.library.searching = true,
            KeyCode::Char('r') => {
                self.config.show_romaji = !self.config.show_romaji;
                if let Err(e) = self.config.save() {
                    tracing::warn!("Could not persist config: {}", e);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.catalog.search(&self.state.library.query).len();
                if self.state.library.selected + 1 < count {
                    self.state.library.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.library.selected = self.state.library.selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_library_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.state.library.searching = false,
            KeyCode::Backspace => {
                self.state.library.query.pop();
                self.state.library.selected = 0;
            }
            KeyCode::Char(c) => {
                self.state.library.query.push(c);
                self.state.library.selected = 0;
            }
            _ => {}
        }
    }

    // ----- Review -----

    fn handle_review_key(&mut self, key: KeyCode) {
        let phase = std::mem::take(&mut self.state.review);
        self.state.review = self.next_review_phase(phase, key);
    }

    fn next_review_phase(&mut self, phase: ReviewPhase, key: KeyCode) -> ReviewPhase {
        match phase {
            ReviewPhase::Menu { mut selected } => match key {
                KeyCode::Char('j') | KeyCode::Down => {
                    selected = (selected + 1).min(1);
                    ReviewPhase::Menu { selected }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    selected = selected.saturating_sub(1);
                    ReviewPhase::Menu { selected }
                }
                KeyCode::Enter if selected == 0 => ReviewPhase::DailyStart,
                KeyCode::Enter => self.open_flashcard_select(),
                _ => ReviewPhase::Menu { selected },
            },

            ReviewPhase::DailyStart => match key {
                KeyCode::Enter => self.start_daily_review(),
                KeyCode::Esc => ReviewPhase::default(),
                _ => ReviewPhase::DailyStart,
            },

            ReviewPhase::Quiz { session, interaction } => {
                self.handle_quiz_key(session, interaction, key)
            }

            ReviewPhase::Summary { summary } => match key {
                KeyCode::Enter | KeyCode::Esc => ReviewPhase::default(),
                _ => ReviewPhase::Summary { summary },
            },

            ReviewPhase::FlashcardSelect { selected, cursor } => {
                self.handle_flashcard_select_key(selected, cursor, key)
            }

            ReviewPhase::FlashcardPlay { session, flipped } => {
                self.handle_flashcard_play_key(session, flipped, key)
            }

            ReviewPhase::FlashcardComplete { total } => match key {
                KeyCode::Enter | KeyCode::Esc => ReviewPhase::Menu { selected: 1 },
                _ => ReviewPhase::FlashcardComplete { total },
            },
        }
    }

    fn start_daily_review(&mut self) -> ReviewPhase {
        match ReviewSession::plan(
            &self.catalog,
            &self.progress,
            &self.history,
            history::now_ms(),
            &mut self.rng,
        ) {
            Ok(session) => {
                ReviewPhase::Quiz { session, interaction: QuizInteraction::default() }
            }
            Err(e) => {
                self.state.status = Some(e.to_string());
                ReviewPhase::default()
            }
        }
    }

    fn handle_quiz_key(
        &mut self,
        mut session: ReviewSession,
        mut interaction: QuizInteraction,
        key: KeyCode,
    ) -> ReviewPhase {
        if key == KeyCode::Esc {
            // Abandon; attempts already resolved stay in the history
            return ReviewPhase::default();
        }

        let (question, correct_meaning, options) = {
            let Some(item) = session.current() else {
                return ReviewPhase::Summary { summary: session.summary() };
            };
            (item.question, item.kanji.meaning.clone(), item.options.clone())
        };

        match question {
            QuestionType::Meaning => match key {
                KeyCode::Char('j') | KeyCode::Down => {
                    interaction.move_down(options.as_ref().map_or(0, Vec::len));
                }
                KeyCode::Char('k') | KeyCode::Up => interaction.move_up(),
                KeyCode::Enter if interaction.is_locked() => {
                    let correct = interaction.was_correct.unwrap_or(false);
                    return self.resolve_review(session, interaction, correct);
                }
                KeyCode::Enter => {
                    let chosen = interaction.selected;
                    let correct = options
                        .as_ref()
                        .and_then(|o| o.get(chosen))
                        .is_some_and(|answer| *answer == correct_meaning);
                    interaction.chosen = Some(chosen);
                    interaction.was_correct = Some(correct);
                }
                _ => {}
            },
            QuestionType::Draw => match key {
                KeyCode::Enter if !interaction.revealed => interaction.revealed = true,
                KeyCode::Char('y') if interaction.revealed => {
                    return self.resolve_review(session, interaction, true);
                }
                KeyCode::Char('n') if interaction.revealed => {
                    return self.resolve_review(session, interaction, false);
                }
                _ => {}
            },
        }

        ReviewPhase::Quiz { session, interaction }
    }

    /// Resolve the current review item, record the attempt, and persist the
    /// history before anything else happens
    fn resolve_review(
        &mut self,
        mut session: ReviewSession,
        mut interaction: QuizInteraction,
        correct: bool,
    ) -> ReviewPhase {
        if let Some(character) = session.resolve_current(correct) {
            self.history.record(character, Attempt::now(correct));
            if let Err(e) = self.history.save() {
                tracing::error!("Failed to persist review history: {}", e);
                self.state.status = Some("Review history could not be saved".to_string());
            }
        }
        interaction.reset();

        if session.is_finished() {
            ReviewPhase::Summary { summary: session.summary() }
        } else {
            ReviewPhase::Quiz { session, interaction }
        }
    }

    fn open_flashcard_select(&mut self) -> ReviewPhase {
        if self.catalog.completed_kanji(&self.progress).is_empty() {
            self.state.status = Some("Complete a lesson first to unlock flashcards".to_string());
            return ReviewPhase::Menu { selected: 1 };
        }
        ReviewPhase::FlashcardSelect { selected: HashSet::new(), cursor: 0 }
    }

    fn handle_flashcard_select_key(
        &mut self,
        mut selected: HashSet<char>,
        mut cursor: usize,
        key: KeyCode,
    ) -> ReviewPhase {
        let completed = self.catalog.completed_kanji(&self.progress);

        match key {
            KeyCode::Esc => return ReviewPhase::Menu { selected: 1 },
            KeyCode::Char('j') | KeyCode::Down => {
                if cursor + 1 < completed.len() {
                    cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => cursor = cursor.saturating_sub(1),
            KeyCode::Char(' ') => {
                if let Some(kanji) = completed.get(cursor) {
                    if !selected.remove(&kanji.character) {
                        selected.insert(kanji.character);
                    }
                }
            }
            KeyCode::Char('a') => {
                if selected.len() == completed.len() {
                    selected.clear();
                } else {
                    selected = completed.iter().map(|k| k.character).collect();
                }
            }
            KeyCode::Enter => {
                let deck: Vec<KanjiEntry> = completed
                    .iter()
                    .filter(|k| selected.contains(&k.character))
                    .map(|k| (*k).clone())
                    .collect();
                match FlashcardSession::new(deck, &mut self.rng) {
                    Ok(session) => {
                        return ReviewPhase::FlashcardPlay { session, flipped: false };
                    }
                    Err(e) => self.state.status = Some(e.to_string()),
                }
            }
            _ => {}
        }

        ReviewPhase::FlashcardSelect { selected, cursor }
    }

    fn handle_flashcard_play_key(
        &mut self,
        mut session: FlashcardSession,
        mut flipped: bool,
        key: KeyCode,
    ) -> ReviewPhase {
        match key {
            KeyCode::Esc => return ReviewPhase::Menu { selected: 1 },
            KeyCode::Char(' ') => flipped = !flipped,
            KeyCode::Char('m') => {
                session.mark_learned();
                flipped = false;
            }
            KeyCode::Char('r') => {
                session.review_again();
                flipped = false;
            }
            _ => {}
        }

        if session.is_finished() {
            ReviewPhase::FlashcardComplete { total: session.len() }
        } else {
            ReviewPhase::FlashcardPlay { session, flipped }
        }
    }
}
