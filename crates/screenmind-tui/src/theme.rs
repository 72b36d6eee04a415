//! Shared colors and styles.

use ratatui::style::{Color, Modifier, Style};

// Home stack
pub const HEADER_BG: Color = Color::Rgb(0x62, 0x00, 0xEE);
pub const HEADER_FG: Color = Color::White;
pub const TAB_ACTIVE: Color = Color::Rgb(0x62, 0x00, 0xEE);
pub const TAB_INACTIVE: Color = Color::Gray;
pub const SCREEN_BG: Color = Color::Rgb(0xF5, 0xF7, 0xFA);
pub const TITLE_FG: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const SUBTITLE_FG: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const PLACEHOLDER_BG: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const PLACEHOLDER_BORDER: Color = Color::Rgb(0xCC, 0xCC, 0xCC);

// Login
pub const LOGIN_BG: Color = Color::Rgb(0xF8, 0xF9, 0xFA);
pub const LOGO_BG: Color = Color::Rgb(0xE3, 0xF2, 0xFD);
pub const APP_TITLE_FG: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
pub const ACCENT: Color = Color::Rgb(0x21, 0x96, 0xF3);
pub const INPUT_BORDER: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const ERROR: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
pub const ERROR_BG: Color = Color::Rgb(0xFF, 0xE0, 0xE0);
pub const MUTED: Color = Color::Rgb(0x99, 0x99, 0x99);

pub const TITLE: Style = Style::new().fg(TITLE_FG).add_modifier(Modifier::BOLD);
pub const SUBTITLE: Style = Style::new().fg(SUBTITLE_FG);
pub const HEADER: Style = Style::new()
    .fg(HEADER_FG)
    .bg(HEADER_BG)
    .add_modifier(Modifier::BOLD);
pub const PLACEHOLDER: Style = Style::new().fg(TITLE_FG).bg(PLACEHOLDER_BG);
pub const APP_TITLE: Style = Style::new().fg(APP_TITLE_FG).add_modifier(Modifier::BOLD);
pub const LABEL: Style = Style::new().fg(TITLE_FG).add_modifier(Modifier::BOLD);
pub const INPUT_TEXT: Style = Style::new().fg(TITLE_FG);
pub const PLACEHOLDER_TEXT: Style = Style::new().fg(MUTED);
pub const LINK: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
pub const HINT: Style = Style::new().fg(MUTED);
pub const ERROR_TEXT: Style = Style::new().fg(ERROR).bg(ERROR_BG);
pub const BUTTON: Style = Style::new()
    .fg(Color::White)
    .bg(ACCENT)
    .add_modifier(Modifier::BOLD);
pub const BUTTON_DISABLED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Rgb(0x64, 0xB5, 0xF6));

/// Border color of an input, highlighted while focused.
pub const fn input_border(focused: bool) -> Style {
    if focused {
        Style::new().fg(ACCENT)
    } else {
        Style::new().fg(INPUT_BORDER)
    }
}

/// Adds a focus marker to a style.
pub const fn focused(style: Style, is_focused: bool) -> Style {
    if is_focused {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}
