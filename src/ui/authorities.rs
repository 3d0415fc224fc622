//! Authorities view: emergency alarm, alert log, heatmap and quick stats.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::panel;
use crate::app::App;
use crate::data::fixtures::{ALERT_LOG, AUTHORITY_STATS, HEATMAP_THRESHOLDS};
use crate::data::{Band, BandScale};
use crate::pages::authorities::AuthoritiesPage;

pub fn render(frame: &mut Frame, app: &App, page: &AuthoritiesPage, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Alarm
        Constraint::Min(8),    // Log + heatmap
        Constraint::Length(3), // Quick stats
    ])
    .split(area);

    render_alarm(frame, app, page, chunks[0]);

    let middle = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_alert_log(frame, app, page, middle[0]);
    render_heatmap(frame, app, page, middle[1]);

    render_stats(frame, app, chunks[2]);
}

fn render_alarm(frame: &mut Frame, app: &App, page: &AuthoritiesPage, area: Rect) {
    let alarm = page.alarm();
    let (label, style) = if alarm.is_active_at(app.last_update()) {
        let secs = alarm
            .remaining(app.last_update())
            .map(|d| d.as_secs_f64().ceil() as u64)
            .unwrap_or(0);
        (
            format!("⚠ ALARM ACTIVE - all units notified ({}s)", secs),
            Style::default()
                .fg(app.theme.critical)
                .add_modifier(Modifier::BOLD | Modifier::RAPID_BLINK),
        )
    } else {
        (
            "EMERGENCY ALARM  [a] to broadcast to all units".to_string(),
            Style::default()
                .fg(app.theme.critical)
                .add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.critical));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).block(block),
        area,
    );
}

fn render_alert_log(frame: &mut Frame, app: &App, page: &AuthoritiesPage, area: Rect) {
    let header = Row::new(vec!["Time", "Zone", "Severity", "Message"])
        .style(app.theme.header);

    let rows: Vec<Row> = ALERT_LOG
        .iter()
        .skip(page.log_offset())
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.time),
                Cell::from(entry.zone),
                Cell::from(Span::styled(
                    entry.severity.label(),
                    app.theme.severity_style(entry.severity),
                )),
                Cell::from(entry.message),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Min(10),
    ];

    let title = format!("Alert Log ({}/{})", page.log_offset() + 1, ALERT_LOG.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(app, &title));

    frame.render_widget(table, area);
}

fn render_heatmap(frame: &mut Frame, app: &App, page: &AuthoritiesPage, area: Rect) {
    let block = panel(app, "Crowd Heatmap");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 8 {
        return;
    }

    // Last row is the legend; hotspots are plotted above it.
    let map = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    for (zone, band) in page.heatmap() {
        let label = format!("● {} {}%", zone.name, zone.intensity);
        let width = (label.chars().count() as u16).min(map.width);
        let x = map.x + (map.width.saturating_sub(width) as u32 * zone.x as u32 / 100) as u16;
        let y = map.y + (map.height.saturating_sub(1) as u32 * zone.y as u32 / 100) as u16;
        frame.render_widget(
            Paragraph::new(Span::styled(label, app.theme.band_style(band))),
            Rect::new(x, y, width, 1),
        );
    }

    let legend: Vec<Span> = Band::ALL
        .iter()
        .flat_map(|&band| {
            let range = match band {
                Band::Low => format!("≤{}", HEATMAP_THRESHOLDS.elevated_above),
                Band::Medium => format!(
                    "{}-{}",
                    HEATMAP_THRESHOLDS.elevated_above + 1,
                    HEATMAP_THRESHOLDS.critical_above
                ),
                Band::High => format!(">{}", HEATMAP_THRESHOLDS.critical_above),
            };
            [
                Span::styled("■ ", app.theme.band_style(band)),
                Span::styled(
                    format!("{} {}  ", BandScale::Risk.label(band), range),
                    Style::default().fg(app.theme.muted),
                ),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(legend)),
        Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
    );
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(AUTHORITY_STATS.len() * 3);
    for tile in AUTHORITY_STATS {
        spans.push(Span::styled(
            tile.value,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", tile.label),
            Style::default().fg(app.theme.muted),
        ));
        spans.push(Span::raw("    "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(panel(app, "Quick Stats")),
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
    fn test_alarm_banner_states() {
        let (mut app, clock) = test_app(View::Authorities, &[]);
        let text = render_to_string(&app, 120, 40);
        assert!(text.contains("EMERGENCY ALARM"));
        assert!(!text.contains("ALARM ACTIVE"));

        app.trigger_alarm();
        let text = render_to_string(&app, 120, 40);
        assert!(text.contains("ALARM ACTIVE"));

        clock.advance(Duration::from_millis(5000));
        app.update();
        let text = render_to_string(&app, 120, 40);
        assert!(!text.contains("ALARM ACTIVE"));
    }

    #[test]
    fn test_log_heatmap_and_stats() {
        let (app, _clock) = test_app(View::Authorities, &[]);
        let text = render_to_string(&app, 120, 40);
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("14:32:05"));
        assert!(text.contains("Stage 90%"));
        assert!(text.contains("Units Deployed"));
    }

    #[test]
    fn test_log_scroll_hides_first_row() {
        let (mut app, _clock) = test_app(View::Authorities, &[]);
        app.scroll_down();
        let text = render_to_string(&app, 120, 40);
        assert!(!text.contains("14:32:05"));
        assert!(text.contains("14:28:41"));
        assert!(text.contains("Alert Log (2/6)"));
    }
}
