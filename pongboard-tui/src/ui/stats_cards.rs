//! Summary cards — static headline stats above each leaderboard.
//!
//! Card values are fixed copy, not derived from the table data.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Tab};
use crate::theme::Theme;

struct CardCopy {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    description: &'static str,
}

fn cards_for(tab: Tab) -> [CardCopy; 2] {
    match tab {
        Tab::RoundRobin => [
            CardCopy {
                icon: "🏆",
                title: "Champion",
                value: "Sarah Johnson",
                description: "Current reigning champion",
            },
            CardCopy {
                icon: "🎖",
                title: "Total Games",
                value: "247",
                description: "Games played this season",
            },
        ],
        Tab::HeadToHead => [
            CardCopy {
                icon: "🏆",
                title: "Top Player",
                value: "Mike Chen",
                description: "Highest win rate",
            },
            CardCopy {
                icon: "🎖",
                title: "Total Matches",
                value: "183",
                description: "1v1 matches this season",
            },
        ],
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cards = cards_for(app.active_tab);
    render_card(f, chunks[0], &cards[0], &theme);
    render_card(f, chunks[1], &cards[1], &theme);
}

fn render_card(f: &mut Frame, area: Rect, card: &CardCopy, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} {} ", card.icon, card.title))
        .title_style(Style::default().fg(theme.text_secondary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::styled(
            card.value,
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(card.description, Style::default().fg(theme.muted)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tab_has_its_own_copy() {
        let rr = cards_for(Tab::RoundRobin);
        assert_eq!(rr[0].value, "Sarah Johnson");
        assert_eq!(rr[1].value, "247");

        let h2h = cards_for(Tab::HeadToHead);
        assert_eq!(h2h[0].value, "Mike Chen");
        assert_eq!(h2h[1].value, "183");
    }
}
