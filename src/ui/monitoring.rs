//! Live monitoring view: people count, camera grid and analytics.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{format_count, panel, sparkline};
use crate::app::App;
use crate::data::fixtures::{
    CameraFeed, FeedStatus, DETECTION_ACCURACY, FEED_FORMAT, MONITORING_ANALYTICS,
};
use crate::pages::monitoring::LiveMonitoringPage;

pub fn render(frame: &mut Frame, app: &App, page: &LiveMonitoringPage, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(5), // Stat row
        Constraint::Min(8),    // Camera grid
        Constraint::Length(4), // Analytics
    ])
    .split(area);

    render_stats(frame, app, page, chunks[0]);
    render_cameras(frame, app, page, chunks[1]);
    render_analytics(frame, app, chunks[2]);
}

fn render_stats(frame: &mut Frame, app: &App, page: &LiveMonitoringPage, area: Rect) {
    let cards = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let sim = page.simulator();
    let band_style = app.theme.band_style(sim.band());
    let muted = Style::default().fg(app.theme.muted);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let status = vec![
        Line::from(Span::styled(sim.label(), band_style)),
        Line::from(Span::styled("Crowd level", muted)),
    ];
    frame.render_widget(Paragraph::new(status).block(panel(app, "Status")), cards[0]);

    let trend = match page.history().latest_delta() {
        Some(d) if d > 0 => format!("▲ {}", d),
        Some(d) if d < 0 => format!("▼ {}", -d),
        _ => "─".to_string(),
    };
    let spark_width = cards[1].width.saturating_sub(4).max(1) as usize;
    let people = vec![
        Line::from(vec![
            Span::styled(format_count(sim.value()), bold),
            Span::styled(format!("  {}", trend), muted),
        ]),
        Line::from(sparkline(&page.history().sparkline(spark_width))),
    ];
    frame.render_widget(
        Paragraph::new(people).block(panel(app, "People Count")),
        cards[1],
    );

    let cams = vec![
        Line::from(Span::styled(
            format!("{}/{}", page.cameras_online(), page.camera_count()),
            bold,
        )),
        Line::from(Span::styled("Online", muted)),
    ];
    frame.render_widget(Paragraph::new(cams).block(panel(app, "Cameras")), cards[2]);

    let accuracy = vec![
        Line::from(Span::styled(DETECTION_ACCURACY, bold)),
        Line::from(Span::styled("Detection rate", muted)),
    ];
    frame.render_widget(
        Paragraph::new(accuracy).block(panel(app, "AI Accuracy")),
        cards[3],
    );
}

fn render_cameras(frame: &mut Frame, app: &App, page: &LiveMonitoringPage, area: Rect) {
    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
    let mut cells = Vec::with_capacity(4);
    for row in rows.iter() {
        let cols =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(*row);
        cells.extend(cols.iter().copied());
    }

    for ((feed, detected), cell) in page.feeds().zip(cells) {
        render_feed(frame, app, feed, detected, cell);
    }
}

fn render_feed(
    frame: &mut Frame,
    app: &App,
    feed: &CameraFeed,
    detected: Option<i64>,
    area: Rect,
) {
    let muted = Style::default().fg(app.theme.muted);

    let (badge, body) = match (feed.status, detected) {
        (FeedStatus::Active, Some(n)) => (
            Span::styled("● LIVE", Style::default().fg(app.theme.critical)),
            vec![
                Line::from(Span::styled(
                    format!("{} people detected", n),
                    Style::default().fg(app.theme.safe),
                )),
                Line::from(Span::styled(FEED_FORMAT, muted)),
            ],
        ),
        _ => (
            Span::styled("○ OFFLINE", muted),
            vec![
                Line::from(Span::styled(
                    "SIGNAL LOST",
                    Style::default()
                        .fg(app.theme.critical)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled("Reconnecting...", muted)),
            ],
        ),
    };

    let mut lines = vec![Line::from(badge), Line::from("")];
    lines.extend(body);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel(app, feed.name)),
        area,
    );
}

fn render_analytics(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(MONITORING_ANALYTICS.len() * 3);
    for tile in MONITORING_ANALYTICS {
        spans.push(Span::styled(
            format!("{}: ", tile.label),
            Style::default().fg(app.theme.muted),
        ));
        spans.push(Span::styled(
            tile.value,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(panel(app, "Real-time Analytics")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::app::View;
    use crate::ui::tests::render_to_string;
    use std::time::Duration;

    #[test]
    fn test_offline_feed_shows_signal_lost() {
        let (app, _clock) = test_app(View::LiveMonitoring, &[150, 160, 170]);
        let text = render_to_string(&app, 120, 40);
        assert!(text.contains("1,247"));
        assert!(text.contains("Warning"));
        assert!(text.contains("3/4"));
        assert!(text.contains("98.7%"));
        assert!(text.contains("150 people detected"));
        assert!(text.contains("SIGNAL LOST"));
        assert_eq!(text.matches("SIGNAL LOST").count(), 1);
    }

    #[test]
    fn test_tick_updates_count_and_trend() {
        let draws = [150, 160, 170, -60, 201, 202, 203];
        let (mut app, clock) = test_app(View::LiveMonitoring, &draws);
        clock.advance(Duration::from_millis(3000));
        app.update();

        let text = render_to_string(&app, 120, 40);
        assert!(text.contains("1,187"));
        assert!(text.contains("▼ 60"));
        assert!(text.contains("Safe"));
        assert!(text.contains("203 people detected"));
    }
}
