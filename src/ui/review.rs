//! Review tab: daily quiz and free-study flashcards

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::layout::centered_rect;
use super::ViewContext;
use crate::app::state::{QuizInteraction, ReviewPhase};
use crate::review::planner::QuestionType;
use crate::review::{FlashcardSession, ReviewSession, SessionSummary};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    match &ctx.state.review {
        ReviewPhase::Menu { selected } => draw_menu(frame, area, *selected, theme),
        ReviewPhase::DailyStart => draw_daily_start(frame, area, ctx, theme),
        ReviewPhase::Quiz { session, interaction } => {
            draw_quiz(frame, area, session, interaction, theme)
        }
        ReviewPhase::Summary { summary } => draw_summary(frame, area, summary, theme),
        ReviewPhase::FlashcardSelect { selected, cursor } => {
            draw_flashcard_select(frame, area, ctx, selected, *cursor, theme)
        }
        ReviewPhase::FlashcardPlay { session, flipped } => {
            draw_flashcard_play(frame, area, ctx, session, *flipped, theme)
        }
        ReviewPhase::FlashcardComplete { total } => {
            draw_flashcard_complete(frame, area, *total, theme)
        }
    }
}

fn card_block(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    let card = centered_rect(area, 60, 16);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(format!(" {title} "));
    let inner = block.inner(card);
    frame.render_widget(block, card);
    inner
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize, theme: &Theme) {
    let inner = card_block(frame, area, "review", theme);

    let options = [
        ("Daily review", "Ten questions picked from what you missed lately"),
        ("Flashcards", "Free study of any learned kanji, ungraded"),
    ];

    let mut lines = vec![Line::default()];
    for (i, (name, blurb)) in options.iter().enumerate() {
        let marker = if i == selected { "▸ " } else { "  " };
        let style = if i == selected {
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        lines.push(Line::from(Span::styled(format!("{marker}{name}"), style)));
        lines.push(Line::from(Span::styled(
            format!("    {blurb}"),
            Style::default().fg(theme.fg_muted),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_daily_start(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let inner = card_block(frame, area, "daily review", theme);

    let learned = ctx.catalog.completed_kanji(ctx.progress).len();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{learned} kanji learned so far."),
            Style::default().fg(theme.fg_primary),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Kanji you missed this week come first;",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "ones reviewed often lately wait their turn.",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to begin.",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_quiz(
    frame: &mut Frame,
    area: Rect,
    session: &ReviewSession,
    interaction: &QuizInteraction,
    theme: &Theme,
) {
    let title = format!("question {} of {}", session.position() + 1, session.len());
    let inner = card_block(frame, area, &title, theme);

    let Some(item) = session.current() else { return };

    let mut lines = Vec::new();
    match item.question {
        QuestionType::Meaning => {
            lines.push(
                Line::from(Span::styled(
                    item.kanji.character.to_string(),
                    Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(
                Line::from(Span::styled(
                    "What does this kanji mean?",
                    Style::default().fg(theme.fg_secondary),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::default());

            for (i, option) in item.options.iter().flatten().enumerate() {
                let marker = if i == interaction.selected { "▸ " } else { "  " };
                let style = match interaction.chosen {
                    Some(_) if *option == item.kanji.meaning => {
                        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
                    }
                    Some(c) if c == i => Style::default().fg(theme.error),
                    Some(_) => Style::default().fg(theme.fg_muted),
                    None if i == interaction.selected => {
                        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
                    }
                    None => Style::default().fg(theme.fg_primary),
                };
                lines.push(Line::from(Span::styled(format!("{marker}{option}"), style)));
            }

            if let Some(correct) = interaction.was_correct {
                lines.push(Line::default());
                let verdict = if correct {
                    Span::styled("Correct!", Style::default().fg(theme.success))
                } else {
                    Span::styled(
                        format!("It means \"{}\".", item.kanji.meaning),
                        Style::default().fg(theme.error),
                    )
                };
                lines.push(Line::from(verdict).alignment(Alignment::Center));
            }
        }
        QuestionType::Draw => {
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    format!("Write the kanji for \"{}\" on paper.", item.kanji.meaning),
                    Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::default());

            if interaction.revealed {
                lines.push(
                    Line::from(Span::styled(
                        item.kanji.character.to_string(),
                        Style::default()
                            .fg(theme.accent_secondary)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center),
                );
                lines.push(Line::default());
                lines.push(
                    Line::from(Span::styled(
                        "Did you get it right?  y / n",
                        Style::default().fg(theme.fg_secondary),
                    ))
                    .alignment(Alignment::Center),
                );
            } else {
                lines.push(
                    Line::from(Span::styled(
                        "Press Enter when you are done to check.",
                        Style::default().fg(theme.fg_muted),
                    ))
                    .alignment(Alignment::Center),
                );
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &SessionSummary, theme: &Theme) {
    let inner = card_block(frame, area, "session complete", theme);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{} of {} correct", summary.correct, summary.total),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("{}%", summary.accuracy_percent()),
            Style::default().fg(theme.accent_secondary),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Missed kanji will come back sooner.",
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_flashcard_select(
    frame: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    selected: &HashSet<char>,
    cursor: usize,
    theme: &Theme,
) {
    let completed = ctx.catalog.completed_kanji(ctx.progress);

    let items: Vec<ListItem> = completed
        .iter()
        .map(|kanji| {
            let checked = selected.contains(&kanji.character);
            let box_glyph = if checked { "[x] " } else { "[ ] " };
            let style = if checked {
                Style::default().fg(theme.accent_primary)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            ListItem::new(Line::from(vec![
                Span::styled(box_glyph, style),
                Span::styled(
                    format!("{}  {}", kanji.character, kanji.meaning),
                    Style::default().fg(theme.fg_primary),
                ),
            ]))
        })
        .collect();

    let title = format!(" pick cards · {} selected ", selected.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused))
                .title(title),
        )
        .highlight_style(Style::default().bg(theme.selection).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if !completed.is_empty() {
        list_state.select(Some(cursor.min(completed.len() - 1)));
    }
    frame.render_stateful_widget(list, centered_rect(area, 50, 20), &mut list_state);
}

fn draw_flashcard_play(
    frame: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    session: &FlashcardSession,
    flipped: bool,
    theme: &Theme,
) {
    let title = format!("card {} of {}", session.position() + 1, session.len());
    let inner = card_block(frame, area, &title, theme);

    let Some(card) = session.current() else { return };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            card.character.to_string(),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    if flipped {
        let reading = if ctx.config.show_romaji {
            format!("{} ({})", card.hiragana, card.romaji)
        } else {
            card.hiragana.clone()
        };
        lines.push(
            Line::from(Span::styled(
                card.meaning.clone(),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(reading, Style::default().fg(theme.fg_secondary)))
                .alignment(Alignment::Center),
        );
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "m got it · r see it again",
                Style::default().fg(theme.fg_muted),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(
            Line::from(Span::styled(
                "Space to flip",
                Style::default().fg(theme.fg_muted),
            ))
            .alignment(Alignment::Center),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_flashcard_complete(frame: &mut Frame, area: Rect, total: usize, theme: &Theme) {
    let inner = card_block(frame, area, "deck finished", theme);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{total} cards reviewed."),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Flashcard practice never affects your review scores.",
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
