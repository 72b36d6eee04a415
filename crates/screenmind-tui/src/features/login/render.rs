//! Login screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::state::{Focus, LoginState};
use crate::common::TextField;
use crate::render::{SPINNER_FRAMES, SPINNER_SPEED_DIVISOR, centered_column};
use crate::theme;

/// Max width of the form column.
const FORM_WIDTH: u16 = 56;

const EMAIL_PLACEHOLDER: &str = "you@example.com";
const PASSWORD_PLACEHOLDER: &str = "Enter your password";

/// Renders the login screen.
pub fn render_login(login: &LoginState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    frame.render_widget(Block::default().style(Style::new().bg(theme::LOGIN_BG)), area);

    let column = centered_column(area, FORM_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(1), // Email label
            Constraint::Length(3), // Email input
            Constraint::Length(1), // Password label
            Constraint::Length(3), // Password input
            Constraint::Length(3), // Sign in button
            Constraint::Length(1), // Error
            Constraint::Length(5), // Footer links
            Constraint::Min(0),
            Constraint::Length(1), // Key hints
        ])
        .split(column);

    render_header(frame, chunks[0]);

    frame.render_widget(Paragraph::new(Span::styled("Email Address", theme::LABEL)), chunks[1]);
    render_text_input(
        frame,
        chunks[2],
        &login.email,
        EMAIL_PLACEHOLDER,
        false,
        login.focus == Focus::Email && login.is_editable(),
        None,
    );

    frame.render_widget(Paragraph::new(Span::styled("Password", theme::LABEL)), chunks[3]);
    let toggle = Span::styled(
        if login.is_password_visible {
            "[hide]"
        } else {
            "[show]"
        },
        theme::focused(theme::LINK, login.focus == Focus::VisibilityToggle),
    );
    render_text_input(
        frame,
        chunks[4],
        &login.password,
        PASSWORD_PLACEHOLDER,
        !login.is_password_visible,
        login.focus == Focus::Password && login.is_editable(),
        Some(toggle),
    );

    render_submit_button(login, spinner_frame, frame, chunks[5]);

    if let Some(error) = &login.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), theme::ERROR_TEXT))
                .alignment(Alignment::Center),
            chunks[6],
        );
    }

    render_footer(login.focus, frame, chunks[7]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab next · Enter select · Ctrl+T show/hide password · Ctrl+C quit",
            theme::HINT,
        ))
        .alignment(Alignment::Center),
        chunks[9],
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(" 🧠 ", Style::new().bg(theme::LOGO_BG))),
        Line::from(Span::styled("ScreenMind", theme::APP_TITLE)),
        Line::from(Span::styled(
            "Mental Health & Digital Wellness",
            theme::SUBTITLE,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    placeholder: &str,
    masked: bool,
    focused: bool,
    trailing: Option<Span<'static>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::input_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let trailing_width = trailing.as_ref().map_or(0, |s| s.width() as u16 + 1);
    let text_area = Rect {
        width: inner.width.saturating_sub(trailing_width),
        ..inner
    };

    let cursor_column = field.cursor_column(masked);
    let offset = horizontal_offset(cursor_column, text_area.width);
    let text = if field.is_empty() {
        Span::styled(placeholder.to_string(), theme::PLACEHOLDER_TEXT)
    } else {
        Span::styled(field.display(masked), theme::INPUT_TEXT)
    };
    frame.render_widget(Paragraph::new(text).scroll((0, offset)), text_area);

    if let Some(trailing) = trailing {
        let toggle_area = Rect {
            x: text_area.x + text_area.width,
            width: trailing_width,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(trailing).alignment(Alignment::Right),
            toggle_area,
        );
    }

    if focused && text_area.width > 0 {
        let cursor_x = text_area
            .x
            .saturating_add(cursor_column.saturating_sub(offset));
        frame.set_cursor_position((cursor_x, text_area.y));
    }
}

/// Columns to scroll so the cursor stays inside a box `width` columns wide.
fn horizontal_offset(cursor_column: u16, width: u16) -> u16 {
    cursor_column.saturating_sub(width.saturating_sub(1))
}

fn render_submit_button(login: &LoginState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let (label, style) = if login.is_loading {
        let spinner =
            SPINNER_FRAMES[(spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()];
        (format!("{spinner} Signing in..."), theme::BUTTON_DISABLED)
    } else {
        (
            "Sign In".to_string(),
            theme::focused(theme::BUTTON, login.focus == Focus::Submit),
        )
    };

    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

fn render_footer(focus: Focus, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Forgot Password?",
            theme::focused(theme::LINK, focus == Focus::ForgotPassword),
        )),
        Line::from(Span::styled("or", theme::HINT)),
        Line::from(vec![
            Span::styled("Don't have an account? ", theme::SUBTITLE),
            Span::styled(
                "Create Account",
                theme::focused(theme::LINK, focus == Focus::CreateAccount),
            ),
        ]),
        Line::from(Span::styled(
            "By signing in, you agree to our Terms & Privacy Policy",
            theme::HINT,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
