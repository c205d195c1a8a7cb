//! UI rendering for AssignMate
//!
//! A single screen, top to bottom:
//! - Header with the app name and active theme
//! - Input panel with word count and submit control
//! - Mode selector chips
//! - Error banner (only when an error is set)
//! - Result panel (only when a non-empty result exists)
//! - Footer with the disclaimer and keybind hints
//!
//! The info overlay is drawn on top when visible.

mod helpers;
mod info;
mod theme;

pub use helpers::{
    centered_rect, scroll_to_keep_visible, spinner_frame, wrapped_line_count, SPINNER_FRAMES,
};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::Mode;
use crate::state::{Session, MAX_WORDS_HINT};
use info::render_info_overlay;

const INPUT_PLACEHOLDER: &str = "Paste your assignment content here...";
const DISCLAIMER: &str = "AI-based assistance. Not an official plagiarism or AI-detection guarantee.";
const KEY_HINTS: &str =
    "Ctrl+S rewrite · Tab mode · F1 modes · Ctrl+T theme · Ctrl+Y copy · Ctrl+Q quit";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current session.
pub fn render(frame: &mut Frame, app: &App) {
    let session = app.session();
    let palette = Palette::for_theme(session.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let error_height = if session.error().is_some() { 1 } else { 0 };
    let result_constraint = if session.can_copy() {
        Constraint::Percentage(40)
    } else {
        Constraint::Length(0)
    };

    let [header, input, status, modes, error, result, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(error_height),
        result_constraint,
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(frame, header, session, palette);
    render_input(frame, input, app, palette);
    render_status(frame, status, app, palette);
    render_mode_selector(frame, modes, session.mode(), palette);
    if let Some(message) = session.error() {
        render_error(frame, error, message, palette);
    }
    match session.result().filter(|_| session.can_copy()) {
        Some(text) => {
            // Inside the borders
            let rows = wrapped_line_count(text, result.width.saturating_sub(2));
            let visible = result.height.saturating_sub(2) as usize;
            let max_scroll = rows.saturating_sub(visible).min(u16::MAX as usize) as u16;
            app.result_max_scroll.set(max_scroll);
            render_result(frame, result, text, app.result_scroll.min(max_scroll), palette);
        }
        None => app.result_max_scroll.set(0),
    }
    render_footer(frame, footer, palette);

    if session.info_visible() {
        render_info_overlay(frame, palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let theme_label = format!("{} theme [Ctrl+T] ", session.theme());
    let [title_area, theme_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(theme_label.width() as u16),
    ])
    .areas(area);

    let title = Line::from(vec![
        Span::raw(" ✍️ "),
        Span::styled(
            "AssignMate",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);
    frame.render_widget(
        Paragraph::new(Span::styled(theme_label, palette.dim_style())),
        theme_area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .title(Span::styled(
            " Paste your assignment text ",
            Style::default().fg(palette.fg),
        ));
    let inner = block.inner(area);

    if app.input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(INPUT_PLACEHOLDER, palette.dim_style()))
            .block(block);
        frame.render_widget(placeholder, area);
        if !app.session().info_visible() {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // No soft wrap, so buffer lines map one-to-one onto screen rows
    let (row, column) = app.input.cursor_position();
    let row_offset = scroll_to_keep_visible(row, inner.height);
    let column_offset = scroll_to_keep_visible(column, inner.width);

    let paragraph = Paragraph::new(app.input.text())
        .style(Style::default().fg(palette.fg))
        .block(block)
        .scroll((row_offset, column_offset));
    frame.render_widget(paragraph, area);

    if !app.session().info_visible() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (column as u16).saturating_sub(column_offset);
        let y = inner.y + (row as u16).saturating_sub(row_offset);
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Word count on the left, submit control on the right.
fn render_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let button = if session.is_loading() {
        Span::styled(
            format!(" {} Processing... ", spinner_frame(app.tick_count)),
            palette.chip_style(),
        )
    } else if session.can_submit() {
        Span::styled(" Rewrite [Ctrl+S] ", palette.accent_style())
    } else {
        Span::styled(" Rewrite [Ctrl+S] ", palette.chip_style().fg(palette.dim))
    };
    let [count_area, button_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(button.width() as u16 + 1),
    ])
    .areas(area);

    let count = Span::styled(
        format!(" {} words (max {})", session.word_count(), MAX_WORDS_HINT),
        palette.dim_style(),
    );
    frame.render_widget(Paragraph::new(count), count_area);
    frame.render_widget(Paragraph::new(button), button_area);
}

fn render_mode_selector(frame: &mut Frame, area: Rect, selected: Mode, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    for mode in Mode::ALL {
        let style = if mode == selected {
            palette.accent_style()
        } else {
            palette.chip_style()
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        " [F1] What do these modes mean?",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" ⚠ ", palette.error_style().add_modifier(Modifier::BOLD)),
        Span::styled(message, palette.error_style()),
    ]))
    .style(palette.error_style());
    frame.render_widget(banner, area);
}

fn render_result(frame: &mut Frame, area: Rect, text: &str, scroll: u16, palette: &Palette) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.result_border))
        .title(Span::styled(
            " Rewritten Output ",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(" [Ctrl+Y] Copy ", palette.dim_style())).right_aligned(),
        );

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(palette.fg))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(DISCLAIMER, palette.dim_style())).alignment(Alignment::Center),
        Line::from(Span::styled(KEY_HINTS, palette.dim_style())).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
