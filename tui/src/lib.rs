//! TUI rendering for MBTI Snap using ratatui.

mod clipboard;
mod input;
mod theme;

pub use clipboard::SystemClipboard;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use snap_engine::{App, Axis, Letter, ScoreTally, Screen, StatusKind};

const CARD_MAX_WIDTH: u16 = 72;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let page = centered_column(chunks[0], CARD_MAX_WIDTH);
    match app.screen() {
        Screen::Home => draw_home(frame, app, page, &palette, &glyphs),
        Screen::Question { .. } => draw_question(frame, app, page, &palette, &glyphs),
        Screen::Result { .. } => draw_result(frame, app, page, &palette, &glyphs),
    }
    draw_key_hints(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

/// Horizontally center a column no wider than `max_width`.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y,
        width,
        height: area.height,
    }
}

fn page_block(title: &str, palette: &Palette, ascii: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    let block = if ascii {
        block.border_set(border::Set {
            top_left: "+",
            top_right: "+",
            bottom_left: "+",
            bottom_right: "+",
            vertical_left: "|",
            vertical_right: "|",
            horizontal_top: "-",
            horizontal_bottom: "-",
        })
    } else {
        block.border_type(BorderType::Rounded)
    };
    block
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(2))
        .title(Span::styled(format!(" {title} "), styles::title(palette)))
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let total = app.questions().len();
    let heading = Style::default()
        .fg(palette.text_primary)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(palette.text_secondary);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("MBTI Snap", styles::title(palette))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Discover your personality type in {total} quick questions."),
            heading,
        )),
        Line::from(""),
    ];
    for axis in Axis::ALL {
        let [primary, secondary] = axis.letters();
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", glyphs.bullet), Style::default().fg(palette.accent)),
            Span::styled(format!("{:<11}", axis.display_name()), body),
            Span::styled(
                format!(
                    "{} ({primary}) / {} ({secondary})",
                    primary.display_name(),
                    secondary.display_name(),
                ),
                Style::default().fg(palette.text_muted),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", body),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" to start", body),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(page_block("Welcome", palette, app.ui_options().ascii_only));
    frame.render_widget(paragraph, area);
}

fn draw_question(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (Some(question), Some((current, total))) = (app.current_question(), app.progress())
    else {
        return;
    };
    let selected = app.selected_option().unwrap_or(0);

    let block = page_block(
        &format!("Question {current} / {total}"),
        palette,
        app.ui_options().ascii_only,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = inner.width.saturating_sub(7) as usize;
    let percent = (app.progress_ratio() * 100.0).round() as u32;
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                progress_bar(app.progress_ratio(), bar_width, glyphs),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                format!(" {percent:>3}%"),
                Style::default().fg(palette.text_muted),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            question.text.clone(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == selected;
        let marker = if is_selected { glyphs.selected } else { " " };
        let style = if is_selected {
            styles::option_selected(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled(format!("{}. {}", index + 1, option.text), style),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (Some(code), Some(profile)) = (app.result_code(), app.result_profile()) else {
        return;
    };

    let block = page_block("Your result", palette, app.ui_options().ascii_only);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(code.to_string(), styles::code(palette)),
            Span::styled(
                format!(" {} ", glyphs.separator),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(profile.title.clone(), styles::title(palette)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            profile.description.clone(),
            Style::default().fg(palette.text_secondary),
        )),
    ];

    if !profile.tags.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::with_capacity(profile.tags.len() * 2);
        for tag in &profile.tags {
            spans.push(Span::styled(format!(" {tag} "), styles::tag(palette)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if let Some(tally) = app.result_tally() {
        lines.push(Line::from(""));
        lines.extend(tally_lines(tally, inner.width, palette, glyphs));
    }

    if let Some(url) = app.share_url() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Share: ", Style::default().fg(palette.text_muted)),
            Span::styled(url, Style::default().fg(palette.blue)),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// One row per axis: `Energy      E 3 ███░░░ 0 I`.
fn tally_lines(
    tally: &ScoreTally,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let bar_width = (width as usize).saturating_sub(24).clamp(4, 24);
    Axis::ALL
        .into_iter()
        .map(|axis| {
            let [primary, secondary] = axis.letters();
            let (left, right) = (tally.count(primary), tally.count(secondary));
            let total = tally.axis_total(axis);
            let ratio = if total == 0 {
                0.5
            } else {
                left as f32 / total as f32
            };
            let winner = tally.winner(axis);
            let letter_style = |letter: Letter| {
                if letter == winner {
                    styles::code(palette)
                } else {
                    Style::default().fg(palette.text_muted)
                }
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<11} ", axis.display_name()),
                    Style::default().fg(palette.text_secondary),
                ),
                Span::styled(format!("{primary} {left} "), letter_style(primary)),
                Span::styled(
                    progress_bar(ratio, bar_width, glyphs),
                    Style::default().fg(palette.primary_dim),
                ),
                Span::styled(format!(" {right} {secondary}"), letter_style(secondary)),
            ])
        })
        .collect()
}

/// Fixed-width bar with `ratio` of its cells filled.
fn progress_bar(ratio: f32, width: usize, glyphs: &Glyphs) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    let mut bar = glyphs.bar_filled.repeat(filled);
    bar.push_str(&glyphs.bar_empty.repeat(width - filled));
    bar
}

fn key_hints(app: &App, glyphs: &Glyphs) -> &'static [(&'static str, &'static str)] {
    match app.screen() {
        Screen::Home => &[("Enter", "start"), ("q", "quit")],
        Screen::Question { .. } => {
            if glyphs.arrows.is_ascii() {
                &[
                    ("1/2", "answer"),
                    ("Up/Dn", "select"),
                    ("Enter", "confirm"),
                    ("Bksp", "back"),
                    ("q", "quit"),
                ]
            } else {
                &[
                    ("1/2", "answer"),
                    ("↑↓", "select"),
                    ("Enter", "confirm"),
                    ("Bksp", "back"),
                    ("q", "quit"),
                ]
            }
        }
        Screen::Result { .. } => &[
            ("s", "save card"),
            ("c", "copy link"),
            ("p", "share"),
            ("r", "retest"),
            ("q", "quit"),
        ],
    }
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = Vec::new();
    for (index, (key, action)) in key_hints(app, glyphs).iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    let line = Line::from(spans);
    let paragraph = if line.width() <= area.width as usize {
        Paragraph::new(line).alignment(Alignment::Center)
    } else {
        Paragraph::new(line)
    };
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(status) = app.status_message() {
        let color = match status.kind() {
            StatusKind::Info => palette.success,
            StatusKind::Error => palette.error,
        };
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.bullet),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(status.text().to_string(), Style::default().fg(color)),
        ])
    } else {
        let answered = app.ledger().len();
        let total = app.questions().len();
        Line::from(Span::styled(
            format!("{answered}/{total} answered"),
            Style::default().fg(palette.text_muted),
        ))
    };

    let text_width = line.width();
    let paragraph = Paragraph::new(line);
    if text_width > area.width as usize {
        frame.render_widget(paragraph, area);
    } else {
        frame.render_widget(paragraph.alignment(Alignment::Right), area);
    }
}
