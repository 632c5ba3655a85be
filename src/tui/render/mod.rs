pub mod document_view;
pub mod file_panel;
pub mod help_overlay;
mod helpers;
pub mod status_row;
pub mod task_bar;
pub mod viewing_line;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: task bar (2 rows) | viewing line | content | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // task bar + separator
            Constraint::Length(1), // viewing line
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    task_bar::render_task_bar(frame, app, chunks[0]);
    viewing_line::render_viewing_line(frame, app, chunks[1]);

    // Content: document list, with the file panel alongside when visible
    if app.state.show_file_panel {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(1)])
            .split(chunks[2]);
        document_view::render_document_view(frame, app, cols[0]);
        file_panel::render_file_panel(frame, app, cols[1]);
    } else {
        document_view::render_document_view(frame, app, chunks[2]);
    }

    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
