//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::data::fixtures::{Severity, Tone};
use crate::data::Band;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the medium band.
    pub warning: Color,
    /// Color for the top band and alarms.
    pub critical: Color,
    /// Color for the low band.
    pub safe: Color,
    /// Color for secondary text.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section titles and table headers.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Magenta,
            warning: Color::Yellow,
            critical: Color::Red,
            safe: Color::Green,
            muted: Color::Gray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Rgb(176, 112, 0),
            critical: Color::Red,
            safe: Color::Green,
            muted: Color::DarkGray,
            border: Color::Gray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Low => self.safe,
            Band::Medium => self.warning,
            Band::High => self.critical,
        }
    }

    /// Get style for a band
    pub fn band_style(&self, band: Band) -> Style {
        let style = Style::default().fg(self.band_color(band));
        if band.is_top() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Critical => Style::default().fg(self.critical),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Success => Style::default().fg(self.safe),
            Tone::Muted => Style::default().fg(self.muted),
        }
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Critical => Style::default().fg(self.critical).add_modifier(Modifier::BOLD),
            Severity::Warning => Style::default().fg(self.warning),
            Severity::Info => Style::default().fg(self.muted),
        }
    }

    /// Style for a titled panel border.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
