use crate::cli::commands::SnapshotArgs;
use crate::store::{Hierarchy, Intent, apply};

/// Handle `bn snapshot`: replay add/select/delete intents from the seed
/// state to the requested shape and print the result as JSON.
pub fn cmd_snapshot(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_hierarchy(args.tasks, args.docs);
    let json = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{}", json);
    Ok(())
}

/// Grow (or shrink) the seed state to `tasks` tasks of `docs` documents
/// each, cursor back on the first task.
fn build_hierarchy(tasks: usize, docs: usize) -> Hierarchy {
    let mut state = Hierarchy::new();
    if tasks == 0 {
        return apply(&state, Intent::DeleteTask(0));
    }
    for _ in 1..tasks {
        state = apply(&state, Intent::AddTask);
    }
    for ti in 0..tasks {
        state = apply(&state, Intent::SelectTask(ti));
        while state.tasks[ti].docs.len() > docs {
            let last = state.tasks[ti].docs.len() - 1;
            state = apply(&state, Intent::DeleteDocument(last));
        }
        while state.tasks[ti].docs.len() < docs {
            state = apply(&state, Intent::AddDocument);
        }
    }
    apply(&state, Intent::SelectTask(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_shape_is_the_seed() {
        assert_eq!(build_hierarchy(1, 1), Hierarchy::new());
    }

    #[test]
    fn builds_requested_shape() {
        let state = build_hierarchy(3, 2);
        let names: Vec<&str> = state.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Task-1", "Task-2", "Task-3"]);
        for task in &state.tasks {
            let docs: Vec<&str> = task.docs.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(docs, vec!["Document-1", "Document-2"]);
        }
        assert_eq!(state.selection.task, Some(0));
    }

    #[test]
    fn zero_tasks_is_the_empty_hierarchy() {
        let state = build_hierarchy(0, 5);
        assert!(state.tasks.is_empty());
        assert_eq!(state.selection.task, None);
    }

    #[test]
    fn zero_docs_strips_the_seed_document() {
        let state = build_hierarchy(2, 0);
        assert!(state.tasks.iter().all(|t| t.docs.is_empty()));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = build_hierarchy(1, 1);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"Task-1\""));
        assert!(json.contains("\"Document-1\""));
    }
}
