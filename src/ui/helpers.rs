//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner frames for the submit button while loading
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (the event loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 5;

/// Spinner glyph for the given tick count.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// First line to show so that `line` stays inside a viewport of `height`.
pub fn scroll_to_keep_visible(line: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    line.saturating_sub(height - 1).min(u16::MAX as usize) as u16
}

/// Rows `text` occupies when word-wrapped to `width` columns.
///
/// Greedy word wrap, long words broken at the column limit. Every logical
/// line takes at least one row.
pub fn wrapped_line_count(text: &str, width: u16) -> usize {
    let width = width as usize;
    if width == 0 {
        return text.split('\n').count();
    }

    text.split('\n')
        .map(|line| {
            let mut rows = 1;
            let mut column = 0;
            for word in line.split(' ') {
                let word_width = word.width();
                if column > 0 && column + word_width > width {
                    rows += 1;
                    column = 0;
                }
                column += word_width;
                while column > width {
                    rows += 1;
                    column -= width;
                }
                column += 1;
            }
            rows
        })
        .sum()
}
