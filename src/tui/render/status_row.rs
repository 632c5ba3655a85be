use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{pad_to_width, spans_width};

const KEY_HINTS: &str = "h/l task  j/k doc  p/n walk  a/A add  d/D del  ? help  q quit";

/// Render the status row (bottom of screen): Back/Next indicators, dimmed
/// exactly when the corresponding step would change nothing, plus key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25C2} back",
            nav_style(app.state.can_navigate_back()),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            "next \u{25B8}",
            nav_style(app.state.can_navigate_next()),
        ),
    ];

    if app.show_key_hints {
        let content_width = spans_width(&spans);
        let hint_width = KEY_HINTS.chars().count();
        if content_width + hint_width + 1 < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width - 1),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                KEY_HINTS,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }
    pad_to_width(&mut spans, width, Style::default().bg(bg));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
