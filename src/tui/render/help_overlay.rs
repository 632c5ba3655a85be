use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(50, 70, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Selection", header_style)));
    add_binding(&mut lines, " \u{2190}/h \u{2192}/l", "Previous / next task", key_style, desc_style);
    add_binding(&mut lines, " \u{2191}/k \u{2193}/j", "Previous / next document", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Walk", header_style)));
    add_binding(&mut lines, " p", "Back across all documents", key_style, desc_style);
    add_binding(&mut lines, " n", "Next across all documents", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Edit", header_style)));
    add_binding(&mut lines, " a", "Add document to the active task", key_style, desc_style);
    add_binding(&mut lines, " A", "Add task", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete the active document", key_style, desc_style);
    add_binding(&mut lines, " D", "Delete the active task", key_style, desc_style);
    lines.push(Line::from(""));

    add_binding(&mut lines, " ?", "Close this overlay", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(lines: &mut Vec<Line>, key: &str, desc: &str, key_style: Style, desc_style: Style) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// Centered rect taking the given percentages of the parent area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string, seeded_app};

    #[test]
    fn lists_the_bindings() {
        let app = seeded_app();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_help_overlay(frame, &app, area);
        });
        assert!(out.contains("Key Bindings"));
        assert!(out.contains("Add task"));
        assert!(out.contains("Delete the active document"));
        assert!(out.contains("Quit"));
    }
}
