/// A user intent: one atomic transition of the hierarchy.
///
/// Indices are forwarded by the view from the affordance the user picked.
/// Out-of-bounds indices are refused as no-ops in [`super::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Make the task at this index active; document cursor returns to 0 and
    /// the file panel hides.
    SelectTask(usize),
    /// Make the document at this index (within the active task) active and
    /// show the file panel.
    SelectDocument(usize),
    /// Append a new empty task.
    AddTask,
    /// Append a new document to the active task.
    AddDocument,
    /// Remove the task at this index and renumber the survivors.
    DeleteTask(usize),
    /// Remove the document at this index from the active task and renumber
    /// the survivors.
    DeleteDocument(usize),
    /// Step back one position in the flattened task/document sequence.
    NavigateBack,
    /// Step forward one position in the flattened task/document sequence.
    NavigateNext,
}
