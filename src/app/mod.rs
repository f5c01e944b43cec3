//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::config::progress::UserProgress;
use crate::garden::GardenState;
use crate::learn::LearnStep;
use crate::mnemonic::{GeneratorClient, MnemonicStore};
use crate::review::ReviewHistory;
use crate::theme::Theme;
use crate::ui;
use state::{AppState, LearnView, Tab};

/// A finished generation request arriving back on the UI thread
#[derive(Debug)]
pub enum GenEvent {
    /// Story text for a character (fallback text on failure)
    Story { character: char, story: String },
    /// Illustration for a character, or `None` if generation failed
    Image { character: char, image: Option<String> },
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Fixed lesson catalog
    catalog: Catalog,

    /// Active theme
    theme: Theme,

    /// Persisted learner progress
    progress: UserProgress,

    /// Persisted review history
    history: ReviewHistory,

    /// Persisted mnemonic stories and illustrations
    mnemonics: MnemonicStore,

    /// Persisted garden customizations
    garden: GardenState,

    /// Current UI state
    state: AppState,

    /// Generation backend client, shared with spawned request tasks
    generator: Arc<GeneratorClient>,

    /// Sender handed to generation tasks
    gen_tx: mpsc::UnboundedSender<GenEvent>,

    /// Receiver polled by the UI loop
    gen_rx: mpsc::UnboundedReceiver<GenEvent>,

    /// Session randomness (distractors, coin flips, deck shuffles)
    rng: StdRng,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance, loading all persisted state
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        let catalog = Catalog::builtin();
        let progress = UserProgress::load()?;
        let history = ReviewHistory::load()?;
        let mnemonics = MnemonicStore::load()?;
        let garden = GardenState::load()?;
        let generator = Arc::new(GeneratorClient::from_config(config.backend_url.as_deref()));
        let (gen_tx, gen_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            catalog,
            theme: Theme::default(),
            progress,
            history,
            mnemonics,
            garden,
            state: AppState::default(),
            generator,
            gen_tx,
            gen_rx,
            rng: StdRng::from_entropy(),
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Apply finished generation requests
            while let Ok(event) = self.gen_rx.try_recv() {
                self.apply_generation(event);
            }

            // Draw UI
            let ctx = ui::ViewContext {
                state: &self.state,
                catalog: &self.catalog,
                progress: &self.progress,
                history: &self.history,
                mnemonics: &self.mnemonics,
                garden: &self.garden,
                config: &self.config,
            };
            let theme = &self.theme;
            self.terminal.draw(|frame| {
                ui::draw(frame, &ctx, theme);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key.code).await {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                                self.state.status = Some(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Apply a finished generation request, discarding stale responses.
    ///
    /// A response is stale when the originating step is no longer active:
    /// the learner navigated away, or moved on to another kanji.
    fn apply_generation(&mut self, event: GenEvent) {
        match event {
            GenEvent::Story { character, story } => {
                if self.mnemonic_step_active_for(character) {
                    self.state.learn.story = Some(story);
                    self.state.learn.story_pending = false;
                } else {
                    tracing::debug!("Discarding stale story for {}", character);
                }
            }
            GenEvent::Image { character, image } => {
                if self.mnemonic_step_active_for(character) {
                    self.state.learn.image_pending = false;
                } else {
                    tracing::debug!("Illustration for {} arrived after navigation", character);
                }

                if let Some(image) = image {
                    self.mnemonics.set_image(character, image);
                    // Image payloads are large; a failed write keeps the
                    // in-memory copy for this session only
                    if let Err(e) = self.mnemonics.save() {
                        tracing::warn!("Could not persist illustration for {}: {}", character, e);
                    }
                }
            }
        }
    }

    /// Whether the learn session is sitting on the Mnemonic step for the
    /// given character
    fn mnemonic_step_active_for(&self, character: char) -> bool {
        if self.state.tab != Tab::Learn || self.state.learn.view != LearnView::Session {
            return false;
        }
        let Some(session) = &self.state.learn.session else {
            return false;
        };
        session.step() == LearnStep::Mnemonic
            && session.current_kanji(&self.catalog).map(|k| k.character) == Some(character)
    }

    /// Persist the learn session's cursor and resume step
    fn persist_learn_session(&mut self) {
        if let Some(session) = &self.state.learn.session {
            self.progress = session.snapshot();
            if let Err(e) = self.progress.save() {
                tracing::error!("Failed to persist progress: {}", e);
                self.state.status = Some("Progress could not be saved".to_string());
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
