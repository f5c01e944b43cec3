//! Terminal rendering

mod garden;
mod layout;
mod learn;
mod library;
mod review;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::state::{AppState, Tab};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::config::progress::UserProgress;
use crate::garden::GardenState;
use crate::mnemonic::MnemonicStore;
use crate::review::ReviewHistory;
use crate::theme::Theme;

/// Read-only view of everything the renderer needs
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub catalog: &'a Catalog,
    pub progress: &'a UserProgress,
    pub history: &'a ReviewHistory,
    pub mnemonics: &'a MnemonicStore,
    pub garden: &'a GardenState,
    pub config: &'a Config,
}

/// Draw the whole frame
pub fn draw(frame: &mut Frame, ctx: &ViewContext, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    layout::draw_tab_bar(frame, chunks[0], ctx, theme);

    match ctx.state.tab {
        Tab::Garden => garden::draw(frame, chunks[1], ctx, theme),
        Tab::Learn => learn::draw(frame, chunks[1], ctx, theme),
        Tab::Library => library::draw(frame, chunks[1], ctx, theme),
        Tab::Review => review::draw(frame, chunks[1], ctx, theme),
    }

    layout::draw_footer(frame, chunks[2], ctx, theme);
}
