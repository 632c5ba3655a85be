use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the viewing line: which document in which task the cursor is on,
/// with explicit placeholders when either is absent.
pub fn render_viewing_line(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let name_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let doc_name = app
        .state
        .active_doc()
        .map_or("No Document", |d| d.name.as_str());
    let task_name = app
        .state
        .active_task()
        .map_or("No Task", |t| t.name.as_str());

    let line = Line::from(vec![
        Span::styled("Currently Viewing: ", label_style),
        Span::styled(doc_name, name_style),
        Span::styled(" in ", label_style),
        Span::styled(task_name, name_style),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::store::{Intent, apply};
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, seeded_app};

    #[test]
    fn shows_active_names() {
        let app = seeded_app();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            super::render_viewing_line(frame, &app, area);
        });
        assert!(out.contains("Currently Viewing: Document-1 in Task-1"));
    }

    #[test]
    fn shows_placeholders_when_nothing_is_selected() {
        let mut app = seeded_app();
        app.state = apply(&app.state, Intent::DeleteTask(0));
        let out = render_to_string(TERM_W, 1, |frame, area| {
            super::render_viewing_line(frame, &app, area);
        });
        assert!(out.contains("Currently Viewing: No Document in No Task"));
    }

    #[test]
    fn shows_document_placeholder_for_an_empty_task() {
        let mut app = seeded_app();
        app.state = apply(&app.state, Intent::DeleteDocument(0));
        let out = render_to_string(TERM_W, 1, |frame, area| {
            super::render_viewing_line(frame, &app, area);
        });
        assert!(out.contains("Currently Viewing: No Document in Task-1"));
    }
}
