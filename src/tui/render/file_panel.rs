use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Render the file panel: the active document's file association slot
pub fn render_file_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    match app.state.active_doc() {
        Some(doc) => {
            lines.push(Line::from(Span::styled(
                format!(" {}", doc.name),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            match &doc.file {
                Some(path) => lines.push(Line::from(Span::styled(
                    format!(" {}", path.display()),
                    Style::default().fg(app.theme.text).bg(bg),
                ))),
                None => lines.push(Line::from(Span::styled(
                    " no file attached",
                    Style::default().fg(app.theme.dim).bg(bg),
                ))),
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                " No document selected",
                Style::default().fg(app.theme.dim).bg(bg),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
