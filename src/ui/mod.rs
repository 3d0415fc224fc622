//! Terminal rendering using ratatui.
//!
//! [`render`] draws one full frame: header, tab bar, the mounted page,
//! status line and the help overlay when it is open.

pub mod authorities;
pub mod command_center;
pub mod common;
pub mod mobile_alert;
pub mod monitoring;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::pages::Page;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Sparkline characters from lowest to highest.
pub(crate) const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.page {
        Page::CommandCenter(ref page) => command_center::render(frame, app, page, chunks[2]),
        Page::LiveMonitoring(ref page) => monitoring::render(frame, app, page, chunks[2]),
        Page::MobileAlert(ref page) => mobile_alert::render(frame, app, page, chunks[2]),
        Page::Authorities(ref page) => authorities::render(frame, app, page, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ratatui::style::Color::Yellow));
    let y = (area.height / 2).saturating_sub(2);
    let centered = Rect::new(0, y, area.width, 5.min(area.height.saturating_sub(y)));
    frame.render_widget(paragraph, centered);
}

/// A bordered panel with a title in the theme's header style.
pub(crate) fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(ratatui::text::Span::styled(format!(" {} ", title), app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.border_style())
}

/// Text gauge like `██████░░░░` for a percentage.
pub(crate) fn bar(percent: i64, width: usize) -> String {
    let filled = (percent.clamp(0, 100) as usize * width + 50) / 100;
    let mut s = "█".repeat(filled);
    s.push_str(&"░".repeat(width - filled));
    s
}

pub(crate) fn sparkline(levels: &[u8]) -> String {
    levels
        .iter()
        .map(|&v| SPARKLINE_CHARS[v.min(7) as usize])
        .collect()
}

/// Format a count with thousands separators (1247 -> "1,247").
pub(crate) fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
