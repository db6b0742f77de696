//! Overlay widgets — player detail and help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use pongboard_core::{HeadToHeadPlayer, Matchup, RoundRobinPlayer, StreakMark};

use crate::app::{AppState, Tab};
use crate::input::key_bindings_help;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Player detail for the row under the cursor, resolved through the
/// current filter.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let popup = centered_rect(55, 65, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Player Detail [Esc]close ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = match app.active_tab {
        Tab::RoundRobin => {
            let rows = app.round_robin.visible();
            match rows.get(app.rr_cursor) {
                Some(player) => round_robin_detail(player, app.rr_cursor, &theme),
                None => not_found(&theme),
            }
        }
        Tab::HeadToHead => {
            let rows = app.head_to_head.visible();
            match rows.get(app.h2h_cursor) {
                Some(player) => head_to_head_detail(player, &theme),
                None => not_found(&theme),
            }
        }
    };

    f.render_widget(Paragraph::new(lines), inner);
}

fn not_found<'a>(theme: &Theme) -> Vec<Line<'a>> {
    vec![Line::styled(
        "No player selected.",
        Style::default().fg(theme.muted),
    )]
}

fn round_robin_detail<'a>(
    player: &'a RoundRobinPlayer,
    visible_index: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    // Bio flavor from the source UI: style alternates by visible row parity.
    let style = if visible_index % 2 == 0 {
        "Offensive"
    } else {
        "Defensive"
    };

    let mut lines = vec![
        title_line(&player.name, theme),
        Line::from(""),
        Line::styled(
            "Joined the league in 2023",
            Style::default().fg(theme.text_secondary),
        ),
        Line::from(""),
    ];
    detail_line(&mut lines, "Favorite paddle", "Butterfly", theme.text_primary, theme);
    detail_line(&mut lines, "Playing style", style, theme.text_primary, theme);
    lines.push(Line::from(""));
    detail_line(
        &mut lines,
        "Rounds won",
        player.rounds_won.to_string(),
        theme.text_primary,
        theme,
    );
    detail_line(
        &mut lines,
        "Games played",
        player.games_played.to_string(),
        theme.text_primary,
        theme,
    );
    detail_line(
        &mut lines,
        "Win rate",
        format!("{:.1}%", player.win_rate),
        theme.win_rate_color(player.win_rate),
        theme,
    );
    lines
}

fn head_to_head_detail<'a>(player: &'a HeadToHeadPlayer, theme: &Theme) -> Vec<Line<'a>> {
    let mark = player.streak_mark();
    let streak_text = match mark {
        StreakMark::Hot(n) => format!("+{n} 🔥"),
        StreakMark::Cold(n) => format!("-{n} ❄"),
        StreakMark::Even => "none".to_string(),
    };

    let mut lines = vec![title_line(&player.name, theme), Line::from("")];
    detail_line(
        &mut lines,
        "Record",
        format!("{}W / {}L", player.wins, player.losses),
        theme.text_primary,
        theme,
    );
    detail_line(
        &mut lines,
        "Win rate",
        format!("{:.1}%", player.win_rate),
        theme.win_rate_color(player.win_rate),
        theme,
    );
    detail_line(&mut lines, "Streak", streak_text, theme.streak_color(mark), theme);
    lines.push(Line::from(""));
    matchup_line(&mut lines, "Best Matchup", &player.best_matchup, theme.positive, theme);
    matchup_line(&mut lines, "Worst Matchup", &player.worst_matchup, theme.negative, theme);
    lines
}

fn title_line<'a>(name: &'a str, theme: &Theme) -> Line<'a> {
    Line::styled(
        name,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )
}

fn detail_line<'a>(
    lines: &mut Vec<Line<'a>>,
    label: &str,
    value: impl Into<String>,
    color: ratatui::style::Color,
    theme: &Theme,
) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:>16}: ", label),
            Style::default().fg(theme.muted),
        ),
        Span::styled(value.into(), Style::default().fg(color)),
    ]));
}

fn matchup_line<'a>(
    lines: &mut Vec<Line<'a>>,
    label: &str,
    matchup: &Matchup,
    color: ratatui::style::Color,
    theme: &Theme,
) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:>16}: ", label),
            Style::default().fg(theme.muted),
        ),
        Span::styled(matchup.name.clone(), Style::default().fg(theme.text_primary)),
        Span::raw("  "),
        Span::styled(
            matchup.score(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
}

/// Help overlay listing every key binding.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Help [Esc]close ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>14}  ", keys),
                Style::default().fg(theme.accent),
            ),
            Span::styled(desc, Style::default().fg(theme.text_secondary)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
