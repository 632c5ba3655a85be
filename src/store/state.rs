use serde::{Deserialize, Serialize};

use crate::model::{Document, Task};

/// The navigation cursor: which task, and which document within it, is
/// currently viewed.
///
/// `task = None` means there is no task to point at. `doc = None` means "no
/// document" — navigating back into a task with zero documents parks the
/// cursor there. A `Some` index is not guaranteed to be in bounds after
/// deletions; the read accessors on [`Hierarchy`] resolve stale indices to
/// "nothing selected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub task: Option<usize>,
    pub doc: Option<usize>,
}

/// The whole hierarchy state: ordered tasks, the selection cursor, and the
/// file panel visibility flag.
///
/// Mutation goes exclusively through [`super::apply`], one intent at a time.
/// Everything on this type is a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub tasks: Vec<Task>,
    pub selection: Selection,
    pub show_file_panel: bool,
}

impl Hierarchy {
    /// The seed state: one task holding one document, both selected, file
    /// panel hidden.
    pub fn new() -> Self {
        let mut task = Task::numbered(1);
        task.docs.push(Document::numbered(1));
        Hierarchy {
            tasks: vec![task],
            selection: Selection {
                task: Some(0),
                doc: Some(0),
            },
            show_file_panel: false,
        }
    }

    /// The task under the cursor, if the cursor points at one.
    pub fn active_task(&self) -> Option<&Task> {
        self.tasks.get(self.selection.task?)
    }

    /// The document under the cursor, if the cursor points at one.
    pub fn active_doc(&self) -> Option<&Document> {
        self.active_task()?.docs.get(self.selection.doc?)
    }

    /// True exactly when [`Intent::NavigateBack`] would change state. The
    /// view disables its Back affordance when this is false.
    ///
    /// [`Intent::NavigateBack`]: super::Intent::NavigateBack
    pub fn can_navigate_back(&self) -> bool {
        let Some(ti) = self.selection.task else {
            return false;
        };
        if matches!(self.selection.doc, Some(di) if di > 0) {
            return true;
        }
        ti > 0 && self.tasks.get(ti - 1).is_some()
    }

    /// True exactly when [`Intent::NavigateNext`] would change state. The
    /// view disables its Next affordance when this is false.
    ///
    /// [`Intent::NavigateNext`]: super::Intent::NavigateNext
    pub fn can_navigate_next(&self) -> bool {
        let Some(ti) = self.selection.task else {
            return false;
        };
        let Some(task) = self.tasks.get(ti) else {
            return false;
        };
        let at_last_doc = match self.selection.doc {
            Some(di) => di + 1 >= task.docs.len(),
            None => task.docs.is_empty(),
        };
        !at_last_doc || ti + 1 < self.tasks.len()
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Hierarchy::new()
    }
}
