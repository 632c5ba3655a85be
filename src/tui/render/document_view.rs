use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::pad_to_width;

/// Render the document list for the active task
pub fn render_document_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let Some(task) = app.state.active_task() else {
        let empty = Paragraph::new(" No task selected")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    };

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, doc) in task.docs.iter().enumerate() {
        let is_cursor = app.state.selection.doc == Some(i);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!(" {:>2}  ", i + 1),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));
        let name_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        spans.push(Span::styled(doc.name.clone(), name_style));

        if is_cursor {
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
        }
        lines.push(Line::from(spans));
    }

    if task.docs.is_empty() {
        lines.push(Line::from(Span::styled(
            " No documents",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    // Add-document affordance, shown only while a task is active
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " a ",
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(" add document", Style::default().fg(app.theme.dim).bg(bg)),
    ]));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::store::{Intent, apply};
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string, seeded_app};

    #[test]
    fn lists_documents_in_order() {
        let mut app = seeded_app();
        app.state = apply(&app.state, Intent::AddDocument);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_document_view(frame, &app, area);
        });
        let doc1 = out.find("Document-1").unwrap();
        let doc2 = out.find("Document-2").unwrap();
        assert!(doc1 < doc2);
        assert!(out.contains("add document"));
    }

    #[test]
    fn empty_task_shows_placeholder_and_affordance() {
        let mut app = seeded_app();
        app.state = apply(&app.state, Intent::DeleteDocument(0));
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_document_view(frame, &app, area);
        });
        assert!(out.contains("No documents"));
        assert!(out.contains("add document"));
    }

    #[test]
    fn no_task_hides_the_affordance() {
        let mut app = seeded_app();
        app.state = apply(&app.state, Intent::DeleteTask(0));
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_document_view(frame, &app, area);
        });
        assert!(out.contains("No task selected"));
        assert!(!out.contains("add document"));
    }
}
