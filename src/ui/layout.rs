//! Shared layout helpers: tab bar, footer, centering

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::ViewContext;
use crate::app::state::{LearnView, ReviewPhase, Tab};
use crate::theme::Theme;

pub fn draw_tab_bar(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" 庭 niwa "),
        )
        .style(Style::default().fg(theme.fg_secondary))
        .highlight_style(
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )
        .select(ctx.state.tab.index());

    frame.render_widget(tabs, area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let text = match &ctx.state.status {
        Some(status) => status.clone(),
        None => key_hints(ctx).to_string(),
    };

    let style = if ctx.state.status.is_some() {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.fg_muted)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn key_hints(ctx: &ViewContext) -> &'static str {
    match ctx.state.tab {
        Tab::Garden => " b background · d decorate · Tab switch · q quit",
        Tab::Learn => match ctx.state.learn.view {
            LearnView::LessonList => " j/k select · Enter open · Tab switch · q quit",
            LearnView::Session => {
                " Enter continue · g story · v illustrate · Esc back · q quit"
            }
        },
        Tab::Library => " / search · j/k select · r romaji · Tab switch · q quit",
        Tab::Review => match &ctx.state.review {
            ReviewPhase::Menu { .. } => " j/k select · Enter choose · Tab switch · q quit",
            ReviewPhase::DailyStart => " Enter begin · Esc back · q quit",
            ReviewPhase::Quiz { .. } => " j/k select · Enter answer · y/n grade · Esc abandon",
            ReviewPhase::Summary { .. } => " Enter done",
            ReviewPhase::FlashcardSelect { .. } => {
                " Space toggle · a all · Enter start · Esc back"
            }
            ReviewPhase::FlashcardPlay { .. } => " Space flip · m learned · r again · Esc back",
            ReviewPhase::FlashcardComplete { .. } => " Enter done",
        },
    }
}

/// A rect of the given size centered within `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
