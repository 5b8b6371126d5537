//! Turns one raw input line into a typed, pre-validated [`Command`].
//!
//! The first whitespace token (lower-cased) picks the keyword, short
//! aliases resolve to their canonical form, and each keyword gets its
//! own shape check against the rest of the line and the current task
//! count. One pass per rule, no backtracking.

use crate::command::Command;
use crate::error::{Error, Result};

const BY_DELIMITER: &str = " /by ";
const FROM_DELIMITER: &str = " /from ";
const TO_DELIMITER: &str = " /to ";

const DEADLINE_USAGE: &str = "deadline <description> /by <time>";
const EVENT_USAGE: &str = "event <description> /from <start> /to <end>";

/// Parses `input` against the current `task_count`, yielding one
/// ready-to-run command or the keyword-specific error.
pub fn parse(input: &str, task_count: usize) -> Result<Command> {
    let line = input.trim();
    if line.is_empty() {
        return Err(Error::InvalidCommand(String::new()));
    }

    let (first, rest) = match line.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (line, ""),
    };
    let keyword = first.to_lowercase();

    match resolve_alias(&keyword) {
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "list" => Ok(Command::List),
        "mark" => Ok(Command::Mark {
            number: parse_task_number(rest, task_count)?,
        }),
        "unmark" => Ok(Command::Unmark {
            number: parse_task_number(rest, task_count)?,
        }),
        "delete" => Ok(Command::Delete {
            number: parse_task_number(rest, task_count)?,
        }),
        "find" => parse_find(rest),
        "note" => parse_note(rest, task_count),
        "bye" => Ok(Command::Exit),
        _ => Err(Error::InvalidCommand(keyword)),
    }
}

fn resolve_alias(keyword: &str) -> &str {
    match keyword {
        "t" => "todo",
        "d" => "deadline",
        "e" => "event",
        "l" => "list",
        "m" => "mark",
        "u" => "unmark",
        "del" => "delete",
        "f" => "find",
        "exit" | "quit" | "q" => "bye",
        other => other,
    }
}

fn parse_todo(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(Error::EmptyField("todo description"));
    }
    Ok(Command::AddTodo {
        description: rest.to_string(),
    })
}

fn parse_deadline(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(Error::EmptyField("deadline description"));
    }
    if rest.matches(BY_DELIMITER).count() != 1 {
        return Err(Error::MalformedDelimiter {
            keyword: "deadline",
            usage: DEADLINE_USAGE,
        });
    }
    let Some((description, by)) = rest.split_once(BY_DELIMITER) else {
        return Err(Error::MalformedDelimiter {
            keyword: "deadline",
            usage: DEADLINE_USAGE,
        });
    };
    let description = description.trim();
    let by = by.trim();
    if description.is_empty() {
        return Err(Error::EmptyField("deadline description"));
    }
    if by.is_empty() {
        return Err(Error::EmptyField("deadline time"));
    }
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by: by.to_string(),
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(Error::EmptyField("event description"));
    }
    if rest.matches(FROM_DELIMITER).count() != 1 {
        return Err(Error::MalformedDelimiter {
            keyword: "event",
            usage: EVENT_USAGE,
        });
    }
    let Some((description, times)) = rest.split_once(FROM_DELIMITER) else {
        return Err(Error::MalformedDelimiter {
            keyword: "event",
            usage: EVENT_USAGE,
        });
    };
    if times.matches(TO_DELIMITER).count() != 1 {
        return Err(Error::MalformedDelimiter {
            keyword: "event",
            usage: EVENT_USAGE,
        });
    }
    let Some((from, to)) = times.split_once(TO_DELIMITER) else {
        return Err(Error::MalformedDelimiter {
            keyword: "event",
            usage: EVENT_USAGE,
        });
    };
    let description = description.trim();
    let from = from.trim();
    let to = to.trim();
    if description.is_empty() {
        return Err(Error::EmptyField("event description"));
    }
    if from.is_empty() || to.is_empty() {
        return Err(Error::EmptyField("event time"));
    }
    Ok(Command::AddEvent {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn parse_find(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(Error::EmptyField("search keyword"));
    }
    Ok(Command::Find {
        keyword: rest.to_string(),
    })
}

fn parse_note(rest: &str, task_count: usize) -> Result<Command> {
    let Some((number_token, text)) = rest.split_once(char::is_whitespace) else {
        return Err(Error::EmptyField("note text"));
    };
    let number = parse_task_number(number_token, task_count)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyField("note text"));
    }
    Ok(Command::Note {
        number,
        text: text.to_string(),
    })
}

/// Exactly one token, integer, within `[1, task_count]`.
fn parse_task_number(rest: &str, task_count: usize) -> Result<usize> {
    let mut tokens = rest.split_whitespace();
    let token = match (tokens.next(), tokens.next()) {
        (Some(token), None) => token,
        _ => {
            return Err(Error::InvalidTaskNumber {
                input: rest.to_string(),
                count: task_count,
            })
        }
    };
    let number: usize = token.parse().map_err(|_| Error::InvalidTaskNumber {
        input: token.to_string(),
        count: task_count,
    })?;
    if number < 1 || number > task_count {
        return Err(Error::InvalidTaskNumber {
            input: token.to_string(),
            count: task_count,
        });
    }
    Ok(number)
}
