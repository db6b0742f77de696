//! Bottom status bar — key hints plus the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1/2:view  /:search  j/k:move  Enter:detail  t:theme  ?:help  q:quit",
        Style::default().fg(theme.muted),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.muted)));
        let style = match level {
            StatusLevel::Info => Style::default().fg(theme.accent),
            StatusLevel::Warning => Style::default().fg(theme.negative),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
