//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar: brand, mounted view's live band, system status.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(app.theme.highlight)),
        Span::styled("PUBLICRUSH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.current_view().label()),
        Span::raw(" │ "),
    ];

    if let Some(sim) = app.page.simulator() {
        spans.push(Span::styled(
            format!("{} ", sim.label()),
            app.theme.band_style(sim.band()),
        ));
        spans.push(Span::raw("│ "));
    }

    spans.push(Span::styled("● ", Style::default().fg(app.theme.safe)));
    spans.push(Span::styled(
        "SYSTEM ONLINE",
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Tab titles in display order. Mouse hit-testing uses the same widths.
pub fn tab_titles() -> Vec<String> {
    View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!(" {}:{} ", i + 1, v.label()))
        .collect()
}

/// Which tab (if any) sits at `column` in the tab bar.
pub fn tab_at_column(column: u16) -> Option<View> {
    // Tabs renders a leading space, the title, a trailing space, then the divider.
    let mut start = 0u16;
    for (title, view) in tab_titles().iter().zip(View::ALL) {
        let width = title.chars().count() as u16 + 2;
        if column >= start && column < start + width {
            return Some(view);
        }
        start += width + 1;
    }
    None
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = tab_titles().into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view().index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the transient notice when one is active, otherwise the route and
/// the controls for the current view.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.notice() {
        let paragraph = Paragraph::new(format!(" {} ", msg)).style(
            Style::default()
                .fg(app.theme.critical)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_view() {
        View::CommandCenter | View::LiveMonitoring => "Tab:switch e:export ?:help q:quit",
        View::MobileAlert => "t:trigger demo r:reset Tab:switch ?:help q:quit",
        View::Authorities => "a:alarm ↑↓:scroll log Tab:switch ?:help q:quit",
    };

    let status = format!(
        " {} | t+{:.1}s | {}",
        app.current_view().route(),
        app.last_update().as_secs_f64(),
        controls
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Navigation"),
        Line::from("  1-4         Jump to view"),
        Line::from("  Tab/←/→     Switch views"),
        Line::from(""),
        section(" Mobile Alert"),
        Line::from("  t / Enter   Trigger emergency demo"),
        Line::from("  r / Esc     Reset demo"),
        Line::from(""),
        section(" Authorities"),
        Line::from("  a           Emergency alarm"),
        Line::from("  ↑/↓ j/k     Scroll alert log"),
        Line::from(""),
        section(" General"),
        Line::from("  e           Export to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::tests::render_to_string;

    #[test]
    fn test_tab_hit_testing() {
        // " 1:Dashboard " is 13 chars, plus padding on each side.
        assert_eq!(tab_at_column(0), Some(View::CommandCenter));
        assert_eq!(tab_at_column(14), Some(View::CommandCenter));
        assert_eq!(tab_at_column(15), None);
        assert_eq!(tab_at_column(16), Some(View::LiveMonitoring));
        assert_eq!(tab_at_column(200), None);
    }

    #[test]
    fn test_header_and_tabs() {
        let (app, _clock) = test_app(View::LiveMonitoring, &[]);
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("PUBLICRUSH"));
        assert!(text.contains("SYSTEM ONLINE"));
        assert!(text.contains("2:Live Monitor"));
        assert!(text.contains("4:Authorities"));
    }

    #[test]
    fn test_help_overlay() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        app.toggle_help();
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_notice_replaces_status_line() {
        let (mut app, _clock) = test_app(View::Authorities, &[]);
        app.trigger_alarm();
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("EMERGENCY ALARM ACTIVATED"));
    }
}
