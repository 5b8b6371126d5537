//! The task domain model: a tagged union over the three task shapes
//! plus the completion/note/duration state they all share.

use std::fmt;

use chrono::NaiveDateTime;

use crate::duration;
use crate::error::Result;
use crate::time;

/// The variant-specific part of a task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    /// `from <= to` is deliberately not enforced.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

/// A single tracked task. The description is fixed at construction;
/// everything else is mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    kind: TaskKind,
    description: String,
    done: bool,
    note: String,
    duration: Option<i64>,
}

impl Task {
    fn new(kind: TaskKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            done: false,
            note: String::new(),
            duration: None,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(TaskKind::Todo, description)
    }

    /// Builds a deadline from raw date text, propagating the date
    /// parser's failure.
    pub fn deadline(description: impl Into<String>, by_text: &str) -> Result<Self> {
        let by = time::parse_date_time(by_text)?;
        Ok(Self::deadline_at(description, by))
    }

    /// Builds a deadline from an already-parsed instant (codec path,
    /// no re-validation).
    pub fn deadline_at(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(TaskKind::Deadline { by }, description)
    }

    /// Builds an event from raw date text, propagating the date
    /// parser's failure.
    pub fn event(description: impl Into<String>, from_text: &str, to_text: &str) -> Result<Self> {
        let from = time::parse_date_time(from_text)?;
        let to = time::parse_date_time(to_text)?;
        Ok(Self::event_at(description, from, to))
    }

    /// Builds an event from already-parsed instants (codec path).
    pub fn event_at(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Self {
        Self::new(TaskKind::Event { from, to }, description)
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Record type discriminator: `T`, `D` or `E`.
    pub fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Duration in minutes, if one is attached.
    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    pub fn set_duration(&mut self, minutes: Option<i64>) {
        self.duration = minutes;
    }

    fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", time::format_for_display(by))?;
            }
            TaskKind::Event { from, to } => {
                write!(
                    f,
                    " (from: {} to: {})",
                    time::format_for_display(from),
                    time::format_for_display(to)
                )?;
            }
        }
        if self.has_note() {
            write!(f, " (Note: {})", self.note)?;
        }
        if let Some(minutes) = self.duration {
            write!(f, " (duration: {})", duration::format_duration(minutes))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_tasks_start_undone_with_no_extras() {
        let task = Task::todo("read book");
        assert!(!task.is_done());
        assert_eq!(task.note(), "");
        assert_eq!(task.duration(), None);
        assert_eq!(task.to_string(), "[T][ ] read book");
    }

    #[test]
    fn marking_is_idempotent() {
        let mut task = Task::todo("read book");
        task.mark_done();
        task.mark_done();
        assert!(task.is_done());
        task.mark_undone();
        task.mark_undone();
        assert!(!task.is_done());
    }

    #[test]
    fn deadline_parses_its_date_text() {
        let task = Task::deadline("return book", "2024-12-01").unwrap();
        assert_eq!(
            task.to_string(),
            "[D][ ] return book (by: Dec 01 2024)"
        );
    }

    #[test]
    fn deadline_propagates_date_errors() {
        assert!(matches!(
            Task::deadline("return book", "soon"),
            Err(Error::DateFormat { .. })
        ));
    }

    #[test]
    fn event_displays_both_instants() {
        let mut task = Task::event("trip", "2024-01-01", "2024-01-02").unwrap();
        task.mark_done();
        assert_eq!(
            task.to_string(),
            "[E][X] trip (from: Jan 01 2024 to: Jan 02 2024)"
        );
    }

    #[test]
    fn event_does_not_require_ordered_instants() {
        assert!(Task::event("odd", "2024-01-02", "2024-01-01").is_ok());
    }

    #[test]
    fn display_appends_note_and_duration_when_present() {
        let mut task = Task::todo("write essay");
        task.set_note("library copy");
        task.set_duration(Some(150));
        assert_eq!(
            task.to_string(),
            "[T][ ] write essay (Note: library copy) (duration: 2h 30m)"
        );
    }

    #[test]
    fn variant_fields_come_before_note() {
        let mut task = Task::deadline("return book", "2024-12-01").unwrap();
        task.set_note("ask for extension");
        assert_eq!(
            task.to_string(),
            "[D][ ] return book (by: Dec 01 2024) (Note: ask for extension)"
        );
    }
}
