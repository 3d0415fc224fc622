//! Command center view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{bar, panel, sparkline};
use crate::app::App;
use crate::data::fixtures::RECENT_ACTIVITY;
use crate::data::BandScale;
use crate::pages::command_center::{CommandCenterPage, RISK_SEGMENTS};

pub fn render(frame: &mut Frame, app: &App, page: &CommandCenterPage, area: Rect) {
    let banner_height = if page.alert_visible() { 4 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Length(6), // Stat cards
        Constraint::Min(5),    // Zones + activity
    ])
    .split(area);

    if page.alert_visible() {
        render_alert_banner(frame, app, chunks[0]);
    }
    render_stats(frame, app, page, chunks[1]);

    let lower = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_zones(frame, app, page, lower[0]);
    render_activity(frame, app, lower[1]);
}

fn render_alert_banner(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.critical)
        .add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(Span::styled("⚠ HIGH CROWD DENSITY DETECTED", style)),
        Line::from("Stage Area exceeding safe capacity - deploy crowd control team"),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.critical));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_stats(frame: &mut Frame, app: &App, page: &CommandCenterPage, area: Rect) {
    let cards = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let sim = page.simulator();
    let band_style = app.theme.band_style(sim.band());
    let gauge_width = cards[0].width.saturating_sub(4).max(1) as usize;
    let trend_width = cards[0].width.saturating_sub(14).max(1) as usize;

    let density = vec![
        Line::from(Span::styled(format!("{}%", sim.value()), band_style)),
        Line::from(Span::styled(bar(sim.value(), gauge_width), band_style)),
        Line::from(Span::styled(format!("{} Density", sim.label()), band_style)),
        Line::from(vec![
            Span::styled("Trend ", Style::default().fg(app.theme.muted)),
            Span::raw(sparkline(&page.history().sparkline(trend_width))),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(density).block(panel(app, "Crowd Density")),
        cards[0],
    );

    let lit = page.risk_segments() as usize;
    let meter: String = (0..RISK_SEGMENTS as usize)
        .map(|i| if i < lit { "■ " } else { "□ " })
        .collect();
    let risk = vec![
        Line::from(vec![
            Span::styled(
                page.risk_score().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("/100", Style::default().fg(app.theme.muted)),
        ]),
        Line::from(Span::styled(meter, Style::default().fg(app.theme.highlight))),
        Line::from(Span::styled(
            "AI-Predicted Threat Level",
            Style::default().fg(app.theme.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(risk).block(panel(app, "Risk Score")),
        cards[1],
    );

    let summary = page.zone_summary();
    let zones = vec![
        Line::from(Span::styled(
            summary.total().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} Safe ", summary.low),
                Style::default().fg(app.theme.safe),
            ),
            Span::styled(
                format!("{} Warning ", summary.medium),
                Style::default().fg(app.theme.warning),
            ),
            Span::styled(
                format!("{} Critical", summary.high),
                Style::default().fg(app.theme.critical),
            ),
        ]),
        Line::from(Span::styled(
            "Monitored Perimeters",
            Style::default().fg(app.theme.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(zones).block(panel(app, "Active Zones")),
        cards[2],
    );
}

fn render_zones(frame: &mut Frame, app: &App, page: &CommandCenterPage, area: Rect) {
    let cuts = page.simulator().config().thresholds;
    let gauge_width = 12;

    let lines: Vec<Line> = page
        .zones()
        .map(|(name, density, band)| {
            let style = app.theme.band_style(band);
            Line::from(vec![
                Span::raw(format!("{:<13}", name)),
                Span::styled(bar(density, gauge_width), style),
                Span::raw(format!(" {:>3}% ", density)),
                Span::styled(BandScale::Status.label(band), style),
            ])
        })
        .collect();

    let title = format!("Zone Activity Map (>{}/>{})", cuts.elevated_above, cuts.critical_above);
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), app.theme.header))
        .title(
            Line::from(Span::styled(" ● LIVE ", Style::default().fg(app.theme.safe)))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(RECENT_ACTIVITY.len() * 2);
    for item in RECENT_ACTIVITY {
        lines.push(Line::from(vec![
            Span::styled("● ", app.theme.tone_style(item.tone)),
            Span::raw(item.message),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.age),
            Style::default().fg(app.theme.muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(app, "Recent Activity")),
        area,
    );
}
