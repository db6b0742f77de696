//! Top-level UI layout — header, tab bar, stats cards, board table,
//! status bar, overlays.

pub mod board_panel;
pub mod overlays;
pub mod stats_cards;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::app::{AppState, Overlay, Tab};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = app.theme();

    // Base coat so both palettes cover the whole terminal.
    let base = Block::default().style(
        Style::default()
            .bg(theme.background)
            .fg(theme.text_primary),
    );
    f.render_widget(base, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + tagline
            Constraint::Length(1), // tab bar
            Constraint::Length(4), // stats cards
            Constraint::Min(7),    // leaderboard
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_tabs(f, chunks[1], app);
    stats_cards::render(f, chunks[2], app);
    board_panel::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);

    // Overlays on top.
    match app.overlay {
        Overlay::Detail => overlays::render_detail(f, chunks[3], app),
        Overlay::Help => overlays::render_help(f, f.area(), app),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let lines = vec![
        Line::styled(
            "🏓 Ping Pong Champions 🏓",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Track your office ping pong prowess and claim your rightful place at the top!",
            Style::default().fg(theme.text_secondary),
        ),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let titles = [Tab::RoundRobin, Tab::HeadToHead]
        .iter()
        .map(|t| format!(" {} [{}] ", t.label(), t.index() + 1));

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
