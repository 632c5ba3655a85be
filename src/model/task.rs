use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A document inside a task.
///
/// The name is a position label (`Document-N`, 1-based), kept in sync with
/// the document's place in its task on every insertion and deletion. The file
/// slot travels with the record, so names and file slots cannot drift apart
/// in length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    /// Associated file, if any. No shipped operation fills this in.
    pub file: Option<PathBuf>,
}

impl Document {
    /// Create the document for 1-based position `n`, with an empty file slot.
    pub fn numbered(n: usize) -> Self {
        Document {
            name: format!("Document-{}", n),
            file: None,
        }
    }
}

/// A task: a position-labelled name (`Task-N`, 1-based) and its ordered
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub docs: Vec<Document>,
}

impl Task {
    /// Create the empty task for 1-based position `n`.
    pub fn numbered(n: usize) -> Self {
        Task {
            name: format!("Task-{}", n),
            docs: Vec::new(),
        }
    }
}
