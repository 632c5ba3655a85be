use crate::model::{Document, Task};

use super::intent::Intent;
use super::state::Hierarchy;

/// Apply one intent to the state, producing the next state.
///
/// This is the only mutation path for a [`Hierarchy`]. Each call is one
/// atomic transition: renumbering and cursor adjustment triggered by a
/// deletion land in the same returned snapshot. Invalid indices and boundary
/// conditions degrade to no-ops, never errors.
pub fn apply(state: &Hierarchy, intent: Intent) -> Hierarchy {
    let mut next = state.clone();
    match intent {
        Intent::SelectTask(i) => select_task(&mut next, i),
        Intent::SelectDocument(i) => select_document(&mut next, i),
        Intent::AddTask => add_task(&mut next),
        Intent::AddDocument => add_document(&mut next),
        Intent::DeleteTask(i) => delete_task(&mut next, i),
        Intent::DeleteDocument(i) => delete_document(&mut next, i),
        Intent::NavigateBack => navigate_back(&mut next),
        Intent::NavigateNext => navigate_next(&mut next),
    }
    next
}

fn select_task(next: &mut Hierarchy, index: usize) {
    if index >= next.tasks.len() {
        return;
    }
    next.selection.task = Some(index);
    next.selection.doc = Some(0);
    next.show_file_panel = false;
}

fn select_document(next: &mut Hierarchy, index: usize) {
    let Some(task) = next.active_task() else {
        return;
    };
    if index >= task.docs.len() {
        return;
    }
    next.selection.doc = Some(index);
    next.show_file_panel = true;
}

fn add_task(next: &mut Hierarchy) {
    // Names equal positions, so append keeps the invariant without a renumber.
    next.tasks.push(Task::numbered(next.tasks.len() + 1));
}

fn add_document(next: &mut Hierarchy) {
    let Some(ti) = next.selection.task else {
        return;
    };
    let Some(task) = next.tasks.get_mut(ti) else {
        return;
    };
    task.docs.push(Document::numbered(task.docs.len() + 1));
}

fn delete_task(next: &mut Hierarchy, index: usize) {
    if index >= next.tasks.len() {
        return;
    }
    next.tasks.remove(index);
    renumber_tasks(&mut next.tasks);

    // Only the cursor for the deleted task is repaired; a cursor on another
    // task stays put even if the shift left it out of range (reads resolve
    // that to "no task").
    if next.selection.task == Some(index) {
        next.selection.task = if next.tasks.is_empty() { None } else { Some(0) };
        next.selection.doc = Some(0);
    }
}

fn delete_document(next: &mut Hierarchy, index: usize) {
    let Some(ti) = next.selection.task else {
        return;
    };
    let Some(task) = next.tasks.get_mut(ti) else {
        return;
    };
    if index >= task.docs.len() {
        return;
    }
    task.docs.remove(index);
    renumber_docs(&mut task.docs);

    if next.selection.doc == Some(index) {
        // Even when the last document went away: cursor 0 over an empty list
        // reads as "no document".
        next.selection.doc = Some(0);
        next.show_file_panel = false;
    }
}

fn navigate_back(next: &mut Hierarchy) {
    let Some(ti) = next.selection.task else {
        return;
    };
    if let Some(di) = next.selection.doc
        && di > 0
    {
        next.selection.doc = Some(di - 1);
        return;
    }
    if ti == 0 {
        return;
    }
    let Some(prev) = next.tasks.get(ti - 1) else {
        return;
    };
    next.selection.task = Some(ti - 1);
    // A task with no documents has no last document to land on.
    next.selection.doc = prev.docs.len().checked_sub(1);
}

fn navigate_next(next: &mut Hierarchy) {
    let Some(ti) = next.selection.task else {
        return;
    };
    let Some(task) = next.tasks.get(ti) else {
        return;
    };
    let at_last_doc = match next.selection.doc {
        Some(di) => di + 1 >= task.docs.len(),
        None => task.docs.is_empty(),
    };
    if !at_last_doc {
        next.selection.doc = Some(next.selection.doc.map_or(0, |di| di + 1));
    } else if ti + 1 < next.tasks.len() {
        next.selection.task = Some(ti + 1);
        next.selection.doc = Some(0);
    }
}

fn renumber_tasks(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.name = format!("Task-{}", i + 1);
    }
}

fn renumber_docs(docs: &mut [Document]) {
    for (i, doc) in docs.iter_mut().enumerate() {
        doc.name = format!("Document-{}", i + 1);
    }
}
