//! Pure view/render functions for the TUI.
//!
//! Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::features::{dashboard, login};
use crate::navigation::Route;
use crate::state::AppState;

/// Spinner frames for the sign-in button.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
pub const SPINNER_SPEED_DIVISOR: usize = 6;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match app.nav.current() {
        Route::Login => login::render_login(&app.login, app.spinner_frame, frame, area),
        Route::Home { tab } => {
            dashboard::render_home(&app.dashboard, tab, app.session.as_ref(), frame, area);
        }
    }
}

/// Returns a horizontally centered column at most `max_width` wide.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use screenmind_core::auth::Session;
    use screenmind_core::config::Config;
    use screenmind_core::dashboard::{Tab, stub_providers};

    use super::*;

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn logged_in(tab: Tab) -> AppState {
        let mut app = AppState::new(Config::default(), &stub_providers());
        app.session = Some(Session {
            account: "a@b.com".to_string(),
        });
        app.nav.replace(Route::Home { tab });
        app
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(0, 0, 100, 10);
        assert_eq!(centered_column(area, 40), Rect::new(30, 0, 40, 10));
        assert_eq!(centered_column(Rect::new(2, 0, 20, 5), 40), Rect::new(2, 0, 20, 5));
    }

    #[test]
    fn test_login_screen_renders_form() {
        let app = AppState::new(Config::default(), &stub_providers());
        let screen = draw(&app);
        assert!(screen.contains("ScreenMind"));
        assert!(screen.contains("Sign In"));
        assert!(screen.contains("Forgot Password?"));
    }

    #[test]
    fn test_loading_replaces_button_label() {
        let mut app = AppState::new(Config::default(), &stub_providers());
        assert!(app.login.begin_submit());
        let screen = draw(&app);
        assert!(screen.contains("Signing in..."));
        assert!(!screen.contains("Sign In "));
    }

    #[test]
    fn test_home_screen_renders_active_tab() {
        let screen = draw(&logged_in(Tab::Sleep));
        assert!(screen.contains("Sleep Score: 85"));
        assert!(screen.contains("Social"));
        assert!(screen.contains("Mobility"));
        assert!(!screen.contains("Sign In"));
    }

    #[test]
    fn test_usage_tab_shows_graph_placeholder() {
        let screen = draw(&logged_in(Tab::Usage));
        assert!(screen.contains("Graph Goes Here"));
    }

    #[test]
    fn test_placeholder_box_has_dashed_border() {
        let screen = draw(&logged_in(Tab::Social));
        assert!(screen.contains('╌'));
        assert!(screen.contains('╎'));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = logged_in(Tab::Isolation);
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
