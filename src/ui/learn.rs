//! Learn tab: lesson list and the step-by-step lesson session

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::layout::centered_rect;
use super::ViewContext;
use crate::app::state::LearnView;
use crate::learn::LearnStep;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    match ctx.state.learn.view {
        LearnView::LessonList => draw_lesson_list(frame, area, ctx, theme),
        LearnView::Session => draw_session(frame, area, ctx, theme),
    }
}

fn draw_lesson_list(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let items: Vec<ListItem> = ctx
        .catalog
        .lessons()
        .iter()
        .enumerate()
        .map(|(i, lesson)| {
            let done = completed_in_lesson(ctx, i);
            let marker = if i == ctx.progress.lesson_index { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent_primary)),
                Span::styled(
                    format!("Lesson {}: {}", lesson.number, lesson.title),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(
                    format!("  {done}/{}", lesson.kanji.len()),
                    Style::default().fg(theme.fg_muted),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" lessons "),
        )
        .highlight_style(
            Style::default().bg(theme.selection).add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(ctx.state.learn.selected_lesson));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// How many kanji of lesson `index` sit before the progress cursor
fn completed_in_lesson(ctx: &ViewContext, index: usize) -> usize {
    let len = ctx.catalog.lesson(index).map_or(0, |l| l.kanji.len());
    if index < ctx.progress.lesson_index {
        len
    } else if index == ctx.progress.lesson_index {
        ctx.progress.kanji_index.min(len)
    } else {
        0
    }
}

fn draw_session(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(session) = &ctx.state.learn.session else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

    // Header: lesson and position
    if let Some(lesson) = session.current_lesson(ctx.catalog) {
        let position = format!(
            " Lesson {}: {}  ·  kanji {} of {}",
            lesson.number,
            lesson.title,
            (session.progress().kanji_index + 1).min(lesson.kanji.len()),
            lesson.kanji.len(),
        );
        frame.render_widget(
            Paragraph::new(position).style(Style::default().fg(theme.fg_muted)),
            chunks[0],
        );
    }

    let card = centered_rect(chunks[1], 64, 18);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(format!(" {} ", step_title(session.step())));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    match session.step() {
        LearnStep::SectionStart => draw_section_start(frame, inner, ctx, theme),
        LearnStep::Intro => draw_intro(frame, inner, ctx, theme),
        LearnStep::Trace => draw_trace(frame, inner, ctx, theme),
        LearnStep::Mnemonic => draw_mnemonic(frame, inner, ctx, theme),
        LearnStep::QuizMeaning => draw_quiz_meaning(frame, inner, ctx, theme),
        LearnStep::QuizDraw => draw_quiz_draw(frame, inner, ctx, theme),
        LearnStep::Completed => draw_completed(frame, inner, theme),
    }
}

fn step_title(step: LearnStep) -> &'static str {
    match step {
        LearnStep::SectionStart => "new lesson",
        LearnStep::Intro => "meet the kanji",
        LearnStep::Trace => "trace",
        LearnStep::Mnemonic => "mnemonic",
        LearnStep::QuizMeaning => "quiz · meaning",
        LearnStep::QuizDraw => "quiz · writing",
        LearnStep::Completed => "complete",
    }
}

fn current_kanji<'a>(ctx: &ViewContext<'a>) -> Option<&'a crate::catalog::KanjiEntry> {
    ctx.state.learn.session.as_ref()?.current_kanji(ctx.catalog)
}

fn draw_section_start(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(lesson) =
        ctx.state.learn.session.as_ref().and_then(|s| s.current_lesson(ctx.catalog))
    else {
        return;
    };

    let preview: String =
        lesson.kanji.iter().map(|k| k.character.to_string()).collect::<Vec<_>>().join("  ");

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Lesson {}: {}", lesson.number, lesson.title),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(preview).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            format!("{} kanji ahead. Press Enter to begin.", lesson.kanji.len()),
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_intro(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(kanji) = current_kanji(ctx) else { return };

    let reading = if ctx.config.show_romaji {
        format!("{} ({})", kanji.hiragana, kanji.romaji)
    } else {
        kanji.hiragana.clone()
    };

    let lines = vec![
        Line::default(),
        big_glyph_line(kanji.character, theme),
        Line::default(),
        Line::from(Span::styled(
            kanji.meaning.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(reading, Style::default().fg(theme.fg_secondary)))
            .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_trace(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(kanji) = current_kanji(ctx) else { return };

    let lines = vec![
        Line::default(),
        big_glyph_line(kanji.character, theme),
        Line::default(),
        Line::from(Span::styled(
            "Trace the character on paper a few times.",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Follow the strokes top to bottom, left to right.",
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_mnemonic(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(kanji) = current_kanji(ctx) else { return };

    let mut lines = vec![
        big_glyph_line(kanji.character, theme),
        Line::default(),
    ];

    if ctx.state.learn.story_pending {
        lines.push(
            Line::from(Span::styled(
                "Composing a story...",
                Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );
    } else if let Some(story) = &ctx.state.learn.story {
        let width = area.width.saturating_sub(4).max(20) as usize;
        for wrapped in textwrap::wrap(story, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme.fg_primary),
            )));
        }
    } else {
        lines.push(
            Line::from(Span::styled(
                "No story yet. Press g to generate one.",
                Style::default().fg(theme.fg_muted),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::default());
    if ctx.state.learn.image_pending {
        lines.push(
            Line::from(Span::styled("Painting...", Style::default().fg(theme.fg_muted)))
                .alignment(Alignment::Center),
        );
    } else if ctx.mnemonics.image(kanji.character).is_some() {
        lines.push(
            Line::from(Span::styled(
                "🖼 illustration saved",
                Style::default().fg(theme.success),
            ))
            .alignment(Alignment::Center),
        );
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_quiz_meaning(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(kanji) = current_kanji(ctx) else { return };
    let interaction = &ctx.state.learn.interaction;

    let mut lines = vec![
        big_glyph_line(kanji.character, theme),
        Line::from(Span::styled(
            "What does this kanji mean?",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    for (i, option) in ctx.state.learn.quiz_options.iter().enumerate() {
        lines.push(option_line(
            option,
            i,
            interaction.selected,
            interaction.chosen,
            *option == kanji.meaning,
            theme,
        ));
    }

    if let Some(correct) = interaction.was_correct {
        lines.push(Line::default());
        lines.push(verdict_line(correct, &kanji.meaning, theme));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_quiz_draw(frame: &mut Frame, area: Rect, ctx: &ViewContext, theme: &Theme) {
    let Some(kanji) = current_kanji(ctx) else { return };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Write the kanji for \"{}\" on paper.", kanji.meaning),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    if ctx.state.learn.interaction.revealed {
        lines.push(big_glyph_line(kanji.character, theme));
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "Compare with what you wrote, then press Enter.",
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

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_completed(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "🌸 Every lesson complete! 🌸",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Visit the garden to see everything you have grown,",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "or keep your memory fresh in Review.",
            Style::default().fg(theme.fg_secondary),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// The kanji shown large and centered; terminals render it double-width
fn big_glyph_line(character: char, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        character.to_string(),
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

fn option_line(
    option: &str,
    index: usize,
    selected: usize,
    chosen: Option<usize>,
    is_answer: bool,
    theme: &Theme,
) -> Line<'static> {
    let marker = if index == selected { "▸ " } else { "  " };

    let style = match chosen {
        // Locked: color the truth, not the highlight
        Some(_) if is_answer => Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        Some(c) if c == index => Style::default().fg(theme.error),
        Some(_) => Style::default().fg(theme.fg_muted),
        None if index == selected => {
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
        }
        None => Style::default().fg(theme.fg_primary),
    };

    Line::from(Span::styled(format!("{marker}{option}"), style))
}

fn verdict_line(correct: bool, meaning: &str, theme: &Theme) -> Line<'static> {
    if correct {
        Line::from(Span::styled("Correct!", Style::default().fg(theme.success)))
            .alignment(Alignment::Center)
    } else {
        Line::from(Span::styled(
            format!("Not quite. It means \"{meaning}\"."),
            Style::default().fg(theme.error),
        ))
        .alignment(Alignment::Center)
    }
}
