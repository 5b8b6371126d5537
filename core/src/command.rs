//! One variant per user operation, executed against the task list
//! through a single match. Each execution reports an [`Outcome`] for
//! the presentation layer to render; nothing here touches a stream.

use crate::error::Result;
use crate::model::{Task, TaskList};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddTodo {
        description: String,
    },
    /// Date text stays raw here; [`Task::deadline`] parses it at
    /// execution and its failure surfaces before any mutation.
    AddDeadline {
        description: String,
        by: String,
    },
    AddEvent {
        description: String,
        from: String,
        to: String,
    },
    List,
    Mark {
        number: usize,
    },
    Unmark {
        number: usize,
    },
    Delete {
        number: usize,
    },
    Find {
        keyword: String,
    },
    Note {
        number: usize,
        text: String,
    },
    Exit,
}

/// What a command did, described with rendered task lines and the
/// original 1-based positions where numbering matters.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { task: String, total: usize },
    Listed { tasks: Vec<String> },
    Marked { task: String },
    Unmarked { task: String },
    Deleted { task: String, total: usize },
    Found { matches: Vec<(usize, String)> },
    Noted { task: String },
    Exit,
}

impl Command {
    pub fn execute(&self, tasks: &mut TaskList) -> Result<Outcome> {
        match self {
            Command::AddTodo { description } => add(tasks, Task::todo(description.clone())),
            Command::AddDeadline { description, by } => {
                add(tasks, Task::deadline(description.clone(), by)?)
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => add(tasks, Task::event(description.clone(), from, to)?),
            Command::List => Ok(Outcome::Listed {
                tasks: tasks.tasks().iter().map(Task::to_string).collect(),
            }),
            Command::Mark { number } => Ok(Outcome::Marked {
                task: tasks.mark_done(*number)?.to_string(),
            }),
            Command::Unmark { number } => Ok(Outcome::Unmarked {
                task: tasks.mark_undone(*number)?.to_string(),
            }),
            Command::Delete { number } => {
                let removed = tasks.delete(*number)?;
                Ok(Outcome::Deleted {
                    task: removed.to_string(),
                    total: tasks.len(),
                })
            }
            Command::Find { keyword } => Ok(Outcome::Found {
                matches: find(tasks, keyword),
            }),
            Command::Note { number, text } => Ok(Outcome::Noted {
                task: tasks.set_note(*number, text)?.to_string(),
            }),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Only the exit command ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Whether a successful execution changed the list, i.e. whether
    /// the session should persist afterwards.
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Command::List | Command::Find { .. } | Command::Exit
        )
    }
}

fn add(tasks: &mut TaskList, task: Task) -> Result<Outcome> {
    let rendered = task.to_string();
    tasks.add(task);
    Ok(Outcome::Added {
        task: rendered,
        total: tasks.len(),
    })
}

/// Case-insensitive substring match on descriptions, keeping each
/// match's original 1-based position.
fn find(tasks: &TaskList, keyword: &str) -> Vec<(usize, String)> {
    let needle = keyword.to_lowercase();
    tasks
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
        .map(|(index, task)| (index + 1, task.to_string()))
        .collect()
}
