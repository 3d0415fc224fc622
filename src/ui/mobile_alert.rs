//! Mobile alert view: a phone mockup beside the demo controls.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::app::App;
use crate::data::fixtures::mobile;
use crate::pages::mobile_alert::MobileAlertPage;

/// Phone frame size in cells.
const PHONE_WIDTH: u16 = 34;
const PHONE_HEIGHT: u16 = 22;

pub fn render(frame: &mut Frame, app: &App, page: &MobileAlertPage, area: Rect) {
    let cols = Layout::horizontal([Constraint::Length(PHONE_WIDTH + 4), Constraint::Min(20)])
        .split(area);

    let phone = centered(cols[0], PHONE_WIDTH, PHONE_HEIGHT);
    render_phone(frame, app, page, phone);
    render_controls(frame, app, page, cols[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_phone(frame: &mut Frame, app: &App, page: &MobileAlertPage, area: Rect) {
    let muted = Style::default().fg(app.theme.muted);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("9:41            ▂▄▆ 100%", muted)),
        Line::from(""),
        Line::from(Span::styled("Your zone", muted)),
        Line::from(Span::styled(mobile::YOUR_ZONE, bold)),
        Line::from(""),
    ];

    let border_color = if page.alert_shown() {
        let alert = Style::default()
            .fg(app.theme.critical)
            .add_modifier(Modifier::BOLD);
        lines.extend([
            Line::from(Span::styled(format!("⚠ {}", mobile::ALERT_TITLE), alert)),
            Line::from(mobile::ALERT_BODY),
            Line::from(Span::styled(mobile::ALERT_SOURCE, muted)),
            Line::from(""),
            Line::from(Span::styled("Safe exit", muted)),
            Line::from(Span::styled(
                format!("→ {}", mobile::SAFE_EXIT),
                Style::default().fg(app.theme.safe).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(mobile::SAFE_EXIT_DISTANCE, muted)),
            Line::from(""),
            Line::from(Span::styled("Safe zone", muted)),
            Line::from(mobile::SAFE_ZONE),
            Line::from(Span::styled(mobile::SAFE_ZONE_STATUS, muted)),
        ]);
        app.theme.critical
    } else {
        lines.extend([
            Line::from(""),
            Line::from(Span::styled(
                "✓ All Clear",
                Style::default().fg(app.theme.safe).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("No alerts in your area."),
            Line::from(Span::styled("You will be notified of any danger.", muted)),
        ]);
        app.theme.border
    };

    let block = Block::default()
        .title(Span::styled(" PublicRush ", app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_controls(frame: &mut Frame, app: &App, page: &MobileAlertPage, area: Rect) {
    let key = Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD);
    let (state, state_style) = if page.alert_shown() {
        ("Emergency alert showing", Style::default().fg(app.theme.critical))
    } else {
        ("Idle", Style::default().fg(app.theme.safe))
    };

    let lines = vec![
        Line::from(vec![Span::raw("State: "), Span::styled(state, state_style)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("t", key),
            Span::raw(" / "),
            Span::styled("Enter", key),
            Span::raw("  Trigger Emergency Demo"),
        ]),
        Line::from(vec![
            Span::styled("r", key),
            Span::raw(" / "),
            Span::styled("Esc", key),
            Span::raw("    Reset Demo"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Push notifications reach every attendee in an affected zone \
             with directions to the nearest safe exit.",
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(app, "Emergency Notification Demo")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::app::View;
    use crate::ui::tests::render_to_string;

    #[test]
    fn test_idle_then_alert_then_reset() {
        let (mut app, _clock) = test_app(View::MobileAlert, &[]);
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("All Clear"));
        assert!(!text.contains("EMERGENCY ALERT"));

        app.trigger_demo();
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("EMERGENCY ALERT"));
        assert!(text.contains("Exit B, Gate 3"));
        assert!(!text.contains("All Clear"));

        app.reset_demo();
        let text = render_to_string(&app, 100, 40);
        assert!(text.contains("All Clear"));
    }
}
