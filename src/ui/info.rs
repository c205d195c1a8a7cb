//! "Rewrite Modes Explained" overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::Palette;
use crate::models::Mode;

const OVERLAY_WIDTH: u16 = 64;
/// Title, three modes, spacer, dismiss hint, borders
const OVERLAY_HEIGHT: u16 = 9;

pub fn render_info_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(
            " Rewrite Modes Explained ",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .style(palette.base());

    let mut lines: Vec<Line> = Vec::with_capacity(Mode::ALL.len() + 3);
    lines.push(Line::default());
    for mode in Mode::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}: ", mode.label()),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(mode.description(), palette.dim_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(" [Enter] Got it ", palette.accent_style()))
            .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
