//! Garden tab: one plant per completed kanji

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::ViewContext;
use crate::theme::Theme;

/// Growth stage glyph for one plant, from lifetime review accuracy.
///
/// A kanji that was never quizzed is a fresh sprout; weak accuracy stays
/// small, strong accuracy blooms.
fn plant_glyph(accuracy: Option<f32>) -> &'static str {
    match accuracy {
        None => "🌱",
        Some(a) if a < 0.5 => "🌱",
        Some(a) if a < 0.8 => "🌿",
        Some(_) => "🌸",
    }
}

pub fn draw(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let chunks =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    draw_header(frame, chunks[0], ctx, theme);
    draw_plot(frame, chunks[1], ctx, theme);
}

fn draw_header(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let completed = ctx.catalog.completed_kanji(ctx.progress).len();
    let total = ctx.catalog.total_kanji();

    let line = Line::from(vec![
        Span::styled(
            ctx.garden.background.label(),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {completed} of {total} kanji planted"),
            Style::default().fg(theme.fg_secondary),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
        ),
        area,
    );
}

fn draw_plot(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" garden ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let completed = ctx.catalog.completed_kanji(ctx.progress);
    if completed.is_empty() {
        let msg = Paragraph::new("Nothing planted yet. Finish a kanji in Learn to grow one.")
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    // One plant per completed kanji, labelled with its character
    let mut lines = Vec::new();
    for row in completed.chunks(8) {
        let mut spans = Vec::new();
        for kanji in row {
            let glyph = plant_glyph(ctx.history.accuracy(kanji.character));
            spans.push(Span::raw(format!(" {glyph} ")));
            spans.push(Span::styled(
                format!("{} ", kanji.character),
                Style::default().fg(theme.fg_secondary),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    // Decorations sit at their placed coordinates, clipped to the plot
    for decoration in &ctx.garden.decorations {
        if decoration.x + 2 <= inner.width && decoration.y < inner.height {
            let spot = Rect {
                x: inner.x + decoration.x,
                y: inner.y + decoration.y,
                width: 2,
                height: 1,
            };
            frame.render_widget(Paragraph::new(decoration.glyph.as_str()), spot);
        }
    }
}
