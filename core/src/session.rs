//! The interactive read-parse-execute loop. One line is fully handled
//! before the next is read; the list is saved after every successful
//! mutating command, and a save failure is reported without rolling
//! back the in-memory change.

use log::warn;

use crate::command::Outcome;
use crate::model::TaskList;
use crate::parser;
use crate::storage::Storage;
use crate::ui::Console;

const DIVIDER: &str = "____________________________________________________________";

pub struct Session<C: Console> {
    tasks: TaskList,
    storage: Storage,
    console: C,
}

impl<C: Console> Session<C> {
    /// Hydrates the task list from storage; a total read failure falls
    /// back to an empty list with a user-visible warning.
    pub fn new(storage: Storage, mut console: C) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("could not load saved tasks: {err}");
                console.write_lines(&[format!(
                    " Warning: could not load saved tasks ({err}). Starting fresh."
                )]);
                TaskList::new()
            }
        };
        Self {
            tasks,
            storage,
            console,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs until the exit command or end of input.
    pub fn run(&mut self) {
        self.show(&[
            " taskline at your service.".to_string(),
            " What can I do for you?".to_string(),
        ]);

        while let Some(line) = self.console.read_line() {
            let command = match parser::parse(&line, self.tasks.len()) {
                Ok(command) => command,
                Err(err) => {
                    self.show(&[format!(" {err}")]);
                    continue;
                }
            };
            match command.execute(&mut self.tasks) {
                Ok(outcome) => {
                    let lines = render(&outcome);
                    if !lines.is_empty() {
                        self.show(&lines);
                    }
                    if command.mutates() {
                        self.save();
                    }
                    if command.is_exit() {
                        break;
                    }
                }
                Err(err) => self.show(&[format!(" {err}")]),
            }
        }

        self.show(&[" Bye. Hope to see you again soon!".to_string()]);
    }

    fn save(&mut self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            warn!("could not save tasks: {err}");
            self.console.write_lines(&[format!(
                " Warning: could not save tasks ({err}). Changes are kept in memory."
            )]);
        }
    }

    fn show(&mut self, lines: &[String]) {
        let mut block = Vec::with_capacity(lines.len() + 2);
        block.push(DIVIDER.to_string());
        block.extend(lines.iter().cloned());
        block.push(DIVIDER.to_string());
        self.console.write_lines(&block);
    }
}

/// Renders an outcome into the message lines shown to the user.
pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Added { task, total } => vec![
            " Got it. I've added this task:".to_string(),
            format!("   {task}"),
            format!(" Now you have {total} tasks in the list."),
        ],
        Outcome::Listed { tasks } if tasks.is_empty() => {
            vec![" Your list is empty.".to_string()]
        }
        Outcome::Listed { tasks } => {
            let mut lines = vec![" Here are the tasks in your list:".to_string()];
            lines.extend(
                tasks
                    .iter()
                    .enumerate()
                    .map(|(index, task)| format!(" {}.{}", index + 1, task)),
            );
            lines
        }
        Outcome::Marked { task } => vec![
            " Nice! I've marked this task as done:".to_string(),
            format!("   {task}"),
        ],
        Outcome::Unmarked { task } => vec![
            " OK, I've marked this task as not done yet:".to_string(),
            format!("   {task}"),
        ],
        Outcome::Deleted { task, total } => vec![
            " Noted. I've removed this task:".to_string(),
            format!("   {task}"),
            format!(" Now you have {total} tasks in the list."),
        ],
        Outcome::Found { matches } if matches.is_empty() => {
            vec![" No matching tasks found.".to_string()]
        }
        Outcome::Found { matches } => {
            let mut lines = vec![" Here are the matching tasks in your list:".to_string()];
            lines.extend(
                matches
                    .iter()
                    .map(|(number, task)| format!(" {number}.{task}")),
            );
            lines
        }
        Outcome::Noted { task } => vec![
            " Got it! I've added a note to this task:".to_string(),
            format!("   {task}"),
        ],
        Outcome::Exit => Vec::new(),
    }
}
