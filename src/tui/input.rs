use crossterm::event::{KeyCode, KeyEvent};

use crate::store::Intent;

use super::app::App;

/// Handle a key event. One intent per key, applied to completion before the
/// next event is read.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts all input while open
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Left | KeyCode::Char('h') => select_task_offset(app, -1),
        KeyCode::Right | KeyCode::Char('l') => select_task_offset(app, 1),
        KeyCode::Up | KeyCode::Char('k') => select_document_offset(app, -1),
        KeyCode::Down | KeyCode::Char('j') => select_document_offset(app, 1),

        KeyCode::Char('p') => app.dispatch(Intent::NavigateBack),
        KeyCode::Char('n') => app.dispatch(Intent::NavigateNext),

        KeyCode::Char('A') => app.dispatch(Intent::AddTask),
        KeyCode::Char('a') => app.dispatch(Intent::AddDocument),
        KeyCode::Char('D') => delete_active_task(app),
        KeyCode::Char('d') => delete_active_document(app),

        _ => {}
    }
}

/// Select the task `delta` positions away from the active one. Only
/// in-bounds targets are forwarded to the store.
fn select_task_offset(app: &mut App, delta: isize) {
    let Some(ti) = app.state.selection.task else {
        return;
    };
    let Some(target) = ti.checked_add_signed(delta) else {
        return;
    };
    if target < app.state.tasks.len() {
        app.dispatch(Intent::SelectTask(target));
    }
}

/// Select the document `delta` positions away from the active one within
/// the active task. A parked cursor (`doc = None`) steps down onto the
/// first document.
fn select_document_offset(app: &mut App, delta: isize) {
    let Some(task) = app.state.active_task() else {
        return;
    };
    let doc_count = task.docs.len();
    let target = match app.state.selection.doc {
        Some(di) => di.checked_add_signed(delta),
        None if delta > 0 => Some(0),
        None => None,
    };
    let Some(target) = target else {
        return;
    };
    if target < doc_count {
        app.dispatch(Intent::SelectDocument(target));
    }
}

fn delete_active_task(app: &mut App) {
    if let Some(ti) = app.state.selection.task
        && ti < app.state.tasks.len()
    {
        app.dispatch(Intent::DeleteTask(ti));
    }
}

fn delete_active_document(app: &mut App) {
    let Some(di) = app.state.selection.doc else {
        return;
    };
    if app.state.active_doc().is_some() {
        app.dispatch(Intent::DeleteDocument(di));
    }
}
