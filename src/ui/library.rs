//! Library tab: searchable reference over the whole catalog

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::ViewContext;
use crate::catalog::KanjiEntry;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let chunks =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    draw_search_bar(frame, chunks[0], ctx, theme);

    let results = ctx.catalog.search(&ctx.state.library.query);
    let panes =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

    draw_results(frame, panes[0], ctx, theme, &results);
    draw_detail(frame, panes[1], ctx, theme, &results);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let border = if ctx.state.library.searching {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let text = if ctx.state.library.query.is_empty() && !ctx.state.library.searching {
        Span::styled("Press / to search", Style::default().fg(theme.fg_muted))
    } else {
        Span::styled(ctx.state.library.query.clone(), Style::default().fg(theme.fg_primary))
    };

    frame.render_widget(
        Paragraph::new(Line::from(text)).block(
            Block::default().borders(Borders::ALL).border_style(border).title(" search "),
        ),
        area,
    );
}

fn draw_results(
    frame: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    theme: &Theme,
    results: &[&KanjiEntry],
) {
    let completed: Vec<char> =
        ctx.catalog.completed_kanji(ctx.progress).iter().map(|k| k.character).collect();

    let items: Vec<ListItem> = results
        .iter()
        .map(|kanji| {
            let learned = completed.contains(&kanji.character);
            let marker = if learned { "● " } else { "○ " };
            let marker_style = if learned {
                Style::default().fg(theme.accent_primary)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(
                    format!("{}  ", kanji.character),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(kanji.meaning.clone(), Style::default().fg(theme.fg_secondary)),
            ]))
        })
        .collect();

    let title = format!(" {} of {} kanji ", results.len(), ctx.catalog.total_kanji());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        )
        .highlight_style(Style::default().bg(theme.selection).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if !results.is_empty() {
        list_state.select(Some(ctx.state.library.selected.min(results.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    theme: &Theme,
    results: &[&KanjiEntry],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" detail ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(kanji) = results.get(ctx.state.library.selected.min(results.len().saturating_sub(1)))
    else {
        frame.render_widget(
            Paragraph::new("No match.").style(Style::default().fg(theme.fg_muted)),
            inner,
        );
        return;
    };

    let reading = if ctx.config.show_romaji {
        format!("{} ({})", kanji.hiragana, kanji.romaji)
    } else {
        kanji.hiragana.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            kanji.character.to_string(),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("meaning  ", Style::default().fg(theme.fg_muted)),
            Span::styled(kanji.meaning.clone(), Style::default().fg(theme.fg_primary)),
        ]),
        Line::from(vec![
            Span::styled("reading  ", Style::default().fg(theme.fg_muted)),
            Span::styled(reading, Style::default().fg(theme.fg_primary)),
        ]),
    ];

    if let Some(accuracy) = ctx.history.accuracy(kanji.character) {
        lines.push(Line::from(vec![
            Span::styled("reviews  ", Style::default().fg(theme.fg_muted)),
            Span::styled(
                format!(
                    "{} attempts, {:.0}% correct",
                    ctx.history.attempts(kanji.character).len(),
                    accuracy * 100.0
                ),
                Style::default().fg(theme.fg_primary),
            ),
        ]));
    }

    let story = ctx
        .mnemonics
        .story(kanji.character)
        .or(kanji.mnemonic.as_deref());
    if let Some(story) = story {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("story", Style::default().fg(theme.fg_muted))));
        let width = inner.width.saturating_sub(2).max(20) as usize;
        for wrapped in textwrap::wrap(story, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme.fg_secondary),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
