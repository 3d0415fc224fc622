use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Size;

use crate::app::{App, View};
use crate::ui::common::tab_at_column;
use crate::ui::{MIN_HEIGHT, MIN_WIDTH};

/// Where `e` writes the mounted page's state.
pub const EXPORT_PATH: &str = "publicrush_export.json";

/// Screen row of the tab bar (below the one-line header).
const TAB_ROW: u16 = 1;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ignore release/repeat events on terminals that report them
    if key.kind != KeyEventKind::Press {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),

        // Direct view access
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.set_view(View::ALL[index]);
        }

        // Authorities
        KeyCode::Char('a') => {
            app.trigger_alarm();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),

        // Mobile demo
        KeyCode::Char('t') | KeyCode::Enter => {
            app.trigger_demo();
        }
        KeyCode::Char('r') | KeyCode::Esc => {
            app.reset_demo();
        }

        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => export(app, Path::new(EXPORT_PATH)),

        _ => {}
    }
}

/// Export and report the outcome on the status line.
fn export(app: &mut App, path: &Path) {
    match app.export_state(path) {
        Ok(()) => app.notify(format!("Exported to {}", path.display())),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            app.notify(format!("Export failed: {}", e));
        }
    }
}

/// Handle mouse events
///
/// `screen` is the terminal size; below the minimum nothing but the resize
/// hint is drawn, so there is nothing to click.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, screen: Size) {
    if screen.width < MIN_WIDTH || screen.height < MIN_HEIGHT {
        return;
    }

    // A click closes help, like any key
    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),

        // Tab clicks
        MouseEventKind::Down(MouseButton::Left) if mouse.row == TAB_ROW => {
            if let Some(view) = tab_at_column(mouse.column) {
                app.set_view(view);
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::pages::Page;

    const SCREEN: Size = Size {
        width: 120,
        height: 40,
    };

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_number_keys_select_views() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        handle_key_event(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.current_view(), View::Authorities);
        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.current_view(), View::LiveMonitoring);
        handle_key_event(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.current_view(), View::LiveMonitoring);
    }

    #[test]
    fn test_tab_and_arrows_cycle() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.current_view(), View::LiveMonitoring);
        handle_key_event(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.current_view(), View::CommandCenter);
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.current_view(), View::Authorities);
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.current_view(), View::CommandCenter);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_alarm_key_only_on_authorities() {
        let (mut app, _clock) = test_app(View::MobileAlert, &[]);
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        assert!(app.notice().is_none());

        handle_key_event(&mut app, press(KeyCode::Char('4')));
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        let Page::Authorities(ref page) = app.page else {
            panic!("expected authorities page");
        };
        assert!(page.alarm().is_active());
    }

    #[test]
    fn test_demo_keys() {
        let (mut app, _clock) = test_app(View::MobileAlert, &[]);
        handle_key_event(&mut app, press(KeyCode::Enter));
        let Page::MobileAlert(ref page) = app.page else {
            panic!("expected mobile page");
        };
        assert!(page.alert_shown());

        handle_key_event(&mut app, press(KeyCode::Esc));
        let Page::MobileAlert(ref page) = app.page else {
            panic!("expected mobile page");
        };
        assert!(!page.alert_shown());
    }

    #[test]
    fn test_export_reports_notice() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        export(&mut app, &path);
        assert!(app.notice().unwrap().starts_with("Exported to"));
        assert!(path.exists());

        export(&mut app, &dir.path().join("missing").join("state.json"));
        assert!(app.notice().unwrap().starts_with("Export failed"));
    }

    #[test]
    fn test_tab_click() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        handle_mouse_event(&mut app, click(17, TAB_ROW), SCREEN);
        assert_eq!(app.current_view(), View::LiveMonitoring);

        // Clicks outside the tab row are ignored
        handle_mouse_event(&mut app, click(2, 5), SCREEN);
        assert_eq!(app.current_view(), View::LiveMonitoring);
    }

    #[test]
    fn test_click_closes_help_without_switching() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        app.toggle_help();

        handle_mouse_event(&mut app, click(17, TAB_ROW), SCREEN);
        assert!(!app.show_help);
        assert_eq!(app.current_view(), View::CommandCenter);

        handle_mouse_event(&mut app, click(17, TAB_ROW), SCREEN);
        assert_eq!(app.current_view(), View::LiveMonitoring);
    }

    #[test]
    fn test_clicks_ignored_when_terminal_too_small() {
        let (mut app, _clock) = test_app(View::CommandCenter, &[]);
        let small = Size {
            width: MIN_WIDTH - 1,
            height: 40,
        };
        handle_mouse_event(&mut app, click(17, TAB_ROW), small);
        assert_eq!(app.current_view(), View::CommandCenter);

        let short = Size {
            width: 120,
            height: MIN_HEIGHT - 1,
        };
        handle_mouse_event(&mut app, click(17, TAB_ROW), short);
        assert_eq!(app.current_view(), View::CommandCenter);
    }
}
