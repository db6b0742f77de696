//! Leaderboard table — ranked, filtered rows with sortable metric columns.
//!
//! Columns show a sort affordance in the header: the key hint letter, plus
//! a directional arrow on the active column. Rank badges are positional in
//! the filtered view (filtering the leaders out promotes the rest).

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use pongboard_core::{
    HeadToHeadKey, HeadToHeadPlayer, RankBadge, RoundRobinKey, RoundRobinPlayer, SortConfig,
    SortKey, StreakMark,
};

use crate::app::{AppState, Tab};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    draw_search_line(f, chunks[0], app);

    match app.active_tab {
        Tab::RoundRobin => render_round_robin(f, chunks[1], app),
        Tab::HeadToHead => render_head_to_head(f, chunks[1], app),
    }
}

fn draw_search_line(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let term = app.search();

    let line = if app.search_mode {
        Line::from(vec![
            Span::styled(" 🔍 Search: ", Style::default().fg(theme.accent)),
            Span::styled(
                term.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.accent)),
        ])
    } else if !term.is_empty() {
        Line::from(vec![
            Span::styled(" 🔍 Search: ", Style::default().fg(theme.muted)),
            Span::styled(
                term.to_string(),
                Style::default().fg(theme.text_primary),
            ),
            Span::styled("  (Esc clears)", Style::default().fg(theme.muted)),
        ])
    } else {
        Line::styled(
            " Press / to search players",
            Style::default().fg(theme.muted),
        )
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Header cell for a sortable column: label, key hint, and the directional
/// arrow when the column is the active sort key.
fn sort_header<'a, K: SortKey>(key: K, hint: char, sort: SortConfig<K>, theme: &Theme) -> Cell<'a> {
    if sort.key == key {
        Cell::from(format!("{} [{}]{}", key.label(), hint, sort.direction.arrow())).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Cell::from(format!("{} [{}]", key.label(), hint))
            .style(Style::default().fg(theme.text_secondary))
    }
}

fn plain_header<'a>(label: &'a str, theme: &Theme) -> Cell<'a> {
    Cell::from(label).style(
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    )
}

fn badge_cell<'a>(index: usize, theme: &Theme) -> Cell<'a> {
    let badge = RankBadge::for_index(index);
    let text = match badge {
        RankBadge::Gold => "🏆".to_string(),
        RankBadge::Silver => "🥈".to_string(),
        RankBadge::Bronze => "🥉".to_string(),
        RankBadge::Ordinal(place) => format!("{place}"),
    };
    Cell::from(text).style(Style::default().fg(theme.badge_color(badge)))
}

fn row_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default()
            .bg(theme.neutral)
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary)
    }
}

fn board_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background))
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, term: &str, theme: &Theme) {
    let block = board_block(title, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let msg = Paragraph::new(Span::styled(
        format!("No players match \"{term}\"."),
        Style::default().fg(theme.muted),
    ));
    f.render_widget(msg, inner);
}

fn render_round_robin(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let board = &app.round_robin;
    let rows = board.visible();
    let title = " Round the Table Leaderboard ";

    if rows.is_empty() {
        render_empty(f, area, title, board.search(), &theme);
        return;
    }

    let sort = board.sort();
    let header = Row::new(vec![
        plain_header("#", &theme),
        plain_header("Player", &theme),
        sort_header(RoundRobinKey::RoundsWon, 'r', sort, &theme),
        sort_header(RoundRobinKey::GamesPlayed, 'g', sort, &theme),
        sort_header(RoundRobinKey::WinRate, 'w', sort, &theme),
    ])
    .height(1);

    let table_rows = rows.iter().enumerate().map(|(i, player)| {
        round_robin_row(i, player, i == app.rr_cursor, &theme)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Min(18),
        Constraint::Length(16),
        Constraint::Length(17),
        Constraint::Length(13),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(board_block(title, &theme))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn round_robin_row<'a>(
    index: usize,
    player: &'a RoundRobinPlayer,
    selected: bool,
    theme: &Theme,
) -> Row<'a> {
    let cells = vec![
        badge_cell(index, theme),
        Cell::from(player.name.as_str()),
        Cell::from(format!("{}", player.rounds_won))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(format!("{}", player.games_played)),
        Cell::from(format!("{:.1}%", player.win_rate))
            .style(Style::default().fg(theme.win_rate_color(player.win_rate))),
    ];
    Row::new(cells).style(row_style(selected, theme)).height(1)
}

fn render_head_to_head(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let board = &app.head_to_head;
    let rows = board.visible();
    let title = " 1 vs 1 Leaderboard ";

    if rows.is_empty() {
        render_empty(f, area, title, board.search(), &theme);
        return;
    }

    let sort = board.sort();
    let header = Row::new(vec![
        plain_header("#", &theme),
        plain_header("Player", &theme),
        sort_header(HeadToHeadKey::WinRate, 'w', sort, &theme),
        sort_header(HeadToHeadKey::Wins, 'm', sort, &theme),
        sort_header(HeadToHeadKey::Streak, 's', sort, &theme),
    ])
    .height(1);

    let table_rows = rows.iter().enumerate().map(|(i, player)| {
        head_to_head_row(i, player, i == app.h2h_cursor, &theme)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Length(20),
        Constraint::Length(9),
        Constraint::Length(10),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(board_block(title, &theme))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn head_to_head_row<'a>(
    index: usize,
    player: &'a HeadToHeadPlayer,
    selected: bool,
    theme: &Theme,
) -> Row<'a> {
    let rate_color = theme.win_rate_color(player.win_rate);
    let win_rate = Line::from(vec![
        Span::styled(format!("{:>5.1}% ", player.win_rate), Style::default().fg(rate_color)),
        Span::styled(win_rate_bar(player.win_rate, 10), Style::default().fg(rate_color)),
    ]);

    let record = Line::from(vec![
        Span::styled(
            format!("{}", player.wins),
            Style::default().fg(theme.positive),
        ),
        Span::styled("/", Style::default().fg(theme.muted)),
        Span::styled(
            format!("{}", player.losses),
            Style::default().fg(theme.negative),
        ),
    ]);

    let mark = player.streak_mark();
    let streak_text = match mark {
        StreakMark::Hot(n) => format!("+{n} ↑"),
        StreakMark::Cold(n) => format!("-{n} ↓"),
        StreakMark::Even => "0".to_string(),
    };
    let streak = Span::styled(streak_text, Style::default().fg(theme.streak_color(mark)));

    let cells = vec![
        badge_cell(index, theme),
        Cell::from(player.name.as_str()),
        Cell::from(win_rate),
        Cell::from(record),
        Cell::from(Line::from(streak)),
    ];
    Row::new(cells).style(row_style(selected, theme)).height(1)
}

/// Progress-bar fill proportional to the stored win rate, recomputed every
/// render and never stored.
fn win_rate_bar(rate: f64, width: usize) -> String {
    let filled = ((rate / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}
