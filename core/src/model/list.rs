//! The ordered, mutable task collection. Users address tasks 1-based;
//! the list validates every position itself and is the final authority
//! on range errors, independent of the command parser's pre-check.

use crate::error::{Error, Result};
use crate::model::Task;

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrates a list from already-decoded tasks, preserving order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Ordered snapshot of all tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, number: usize) -> Result<&Task> {
        let index = self.index(number)?;
        Ok(&self.tasks[index])
    }

    /// Removes and returns the task at the given 1-based position.
    pub fn delete(&mut self, number: usize) -> Result<Task> {
        let index = self.index(number)?;
        Ok(self.tasks.remove(index))
    }

    pub fn mark_done(&mut self, number: usize) -> Result<&Task> {
        let index = self.index(number)?;
        self.tasks[index].mark_done();
        Ok(&self.tasks[index])
    }

    pub fn mark_undone(&mut self, number: usize) -> Result<&Task> {
        let index = self.index(number)?;
        self.tasks[index].mark_undone();
        Ok(&self.tasks[index])
    }

    pub fn set_note(&mut self, number: usize, note: &str) -> Result<&Task> {
        let index = self.index(number)?;
        self.tasks[index].set_note(note);
        Ok(&self.tasks[index])
    }

    /// Maps an external 1-based task number to an internal index.
    fn index(&self, number: usize) -> Result<usize> {
        if (1..=self.tasks.len()).contains(&number) {
            Ok(number - 1)
        } else {
            Err(Error::InvalidTaskNumber {
                input: number.to_string(),
                count: self.tasks.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tasks() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("one"),
            Task::todo("two"),
            Task::todo("three"),
        ])
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = TaskList::new();
        list.add(Task::todo("first"));
        list.add(Task::todo("second"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description(), "first");
        assert_eq!(list.get(2).unwrap().description(), "second");
    }

    #[test]
    fn positions_are_one_based() {
        let list = three_tasks();
        assert_eq!(list.get(1).unwrap().description(), "one");
        assert_eq!(list.get(3).unwrap().description(), "three");
    }

    #[test]
    fn zero_and_past_end_are_rejected() {
        let mut list = three_tasks();
        assert!(matches!(
            list.get(0),
            Err(Error::InvalidTaskNumber { .. })
        ));
        assert!(matches!(
            list.get(4),
            Err(Error::InvalidTaskNumber { .. })
        ));
        assert!(list.delete(4).is_err());
        assert!(list.mark_done(0).is_err());
        assert!(list.mark_undone(4).is_err());
        assert!(list.set_note(0, "x").is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn delete_returns_the_removed_task_and_shifts() {
        let mut list = three_tasks();
        let removed = list.delete(2).unwrap();
        assert_eq!(removed.description(), "two");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().description(), "three");
    }

    #[test]
    fn mark_and_unmark_touch_the_right_task() {
        let mut list = three_tasks();
        list.mark_done(2).unwrap();
        assert!(!list.get(1).unwrap().is_done());
        assert!(list.get(2).unwrap().is_done());
        list.mark_undone(2).unwrap();
        assert!(!list.get(2).unwrap().is_done());
    }

    #[test]
    fn set_note_replaces_existing_note() {
        let mut list = three_tasks();
        list.set_note(1, "first note").unwrap();
        list.set_note(1, "second note").unwrap();
        assert_eq!(list.get(1).unwrap().note(), "second note");
    }

    #[test]
    fn empty_list_rejects_every_position() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        assert!(list.get(1).is_err());
        assert!(list.delete(1).is_err());
    }
}
