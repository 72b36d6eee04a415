//! Home screen view: header, active dashboard and tab bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use screenmind_core::auth::Session;
use screenmind_core::dashboard::{DashboardSnapshot, Tab};

use super::state::DashboardState;
use crate::render::centered_column;
use crate::theme;

/// Height of the dashed placeholder box.
const PLACEHOLDER_HEIGHT: u16 = 7;

pub fn render_home(
    dashboard: &DashboardState,
    tab: Tab,
    session: Option<&Session>,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Dashboard
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_header(tab, session, frame, chunks[0]);
    render_dashboard(dashboard.snapshot(tab), frame, chunks[1]);
    render_tab_bar(tab, frame, chunks[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "←/→ or 1-4 switch tabs · q quit",
            theme::HINT,
        ))
        .alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_header(tab: Tab, session: Option<&Session>, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(format!(" {}", tab.title()))];
    if let Some(session) = session {
        spans.push(Span::raw(format!("  ·  {}", session.display_name())));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme::HEADER), area);
}

/// Renders one placeholder dashboard from its snapshot.
pub fn render_dashboard(snapshot: &DashboardSnapshot, frame: &mut Frame, area: Rect) {
    frame.render_widget(Block::default().style(Style::new().bg(theme::SCREEN_BG)), area);

    let column = centered_column(area, area.width.saturating_sub(4));
    let content_height = 2 + 2 + PLACEHOLDER_HEIGHT;
    let top = column.height.saturating_sub(content_height) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(2), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(PLACEHOLDER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(snapshot.title.clone(), theme::TITLE))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(snapshot.subtitle.clone(), theme::SUBTITLE))
            .alignment(Alignment::Center),
        chunks[2],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::LightDoubleDashed)
        .border_style(Style::new().fg(theme::PLACEHOLDER_BORDER))
        .style(theme::PLACEHOLDER);
    let inner = block.inner(chunks[3]);
    frame.render_widget(block, chunks[3]);

    let reading_area = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(snapshot.reading.to_string()).alignment(Alignment::Center),
        reading_area,
    );
}

fn render_tab_bar(active: Tab, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::new().fg(theme::TAB_INACTIVE))
        .highlight_style(
            Style::new()
                .fg(theme::TAB_ACTIVE)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}
