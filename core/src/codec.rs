//! The record codec: one task per self-describing text line.
//!
//! Records look like JSON objects (`{"type":"T","done":false,...}`)
//! but are produced and consumed by hand so the on-disk format stays
//! under this crate's control. The comma split and the unescape both
//! walk the line once and track quoting, so an escaped quote or comma
//! next to a field boundary cannot break a round trip. Unknown keys
//! are ignored on read; optional fields default when absent, and an
//! explicit empty-string note/duration is treated as absent too, so
//! files written by either historical shape load cleanly.

use std::collections::HashMap;

use crate::duration;
use crate::error::{Error, Result};
use crate::model::{Task, TaskKind};
use crate::time;

/// Serializes one task to one line.
pub fn encode(task: &Task) -> String {
    let mut record = format!(
        "{{\"type\":\"{}\",\"done\":{},\"description\":\"{}\"",
        task.type_tag(),
        task.is_done(),
        escape(task.description())
    );
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => {
            record.push_str(&format!(",\"by\":\"{}\"", time::format_for_storage(by)));
        }
        TaskKind::Event { from, to } => {
            record.push_str(&format!(
                ",\"from\":\"{}\",\"to\":\"{}\"",
                time::format_for_storage(from),
                time::format_for_storage(to)
            ));
        }
    }
    if task.has_note() {
        record.push_str(&format!(",\"note\":\"{}\"", escape(task.note())));
    }
    if matches!(task.kind(), TaskKind::Todo) {
        if let Some(minutes) = task.duration() {
            record.push_str(&format!(
                ",\"duration\":\"{}\"",
                duration::format_for_storage(minutes)
            ));
        }
    }
    record.push('}');
    record
}

/// Parses one line back into the task variant it describes.
pub fn decode(line: &str) -> Result<Task> {
    let inner = line
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| parse_error(line, "missing surrounding braces"))?;

    let mut fields = HashMap::new();
    for pair in split_pairs(inner) {
        let Some((key, value)) = pair.split_once(':') else {
            continue;
        };
        fields.insert(
            strip_quotes(key.trim()).to_string(),
            value.trim().to_string(),
        );
    }

    let type_tag = required_string(&fields, "type", line)?;
    let done = fields.get("done").is_some_and(|raw| raw.trim() == "true");
    let description = required_string(&fields, "description", line)?;
    let note = optional_string(&fields, "note");

    let mut task = match type_tag.as_str() {
        "T" => {
            let mut todo = Task::todo(description);
            if let Some(raw) = optional_string(&fields, "duration") {
                let minutes = duration::parse_from_storage(&raw)
                    .map_err(|_| parse_error(line, "invalid duration field"))?;
                todo.set_duration(Some(minutes));
            }
            todo
        }
        "D" => {
            let by = required_instant(&fields, "by", line)?;
            Task::deadline_at(description, by)
        }
        "E" => {
            let from = required_instant(&fields, "from", line)?;
            let to = required_instant(&fields, "to", line)?;
            Task::event_at(description, from, to)
        }
        other => return Err(parse_error(line, format!("unknown task type '{other}'"))),
    };

    if done {
        task.mark_done();
    }
    if let Some(note) = note {
        task.set_note(note);
    }
    Ok(task)
}

/// Splits the brace-stripped record body on commas that sit outside
/// quoted strings.
fn split_pairs(inner: &str) -> Vec<String> {
    let mut pairs = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in inner.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => {
                current.push(c);
                escaped = true;
            }
            '"' => {
                current.push(c);
                in_string = !in_string;
            }
            ',' if !in_string => {
                pairs.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        pairs.push(current);
    }
    pairs
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Unquotes and unescapes a string value; `None` if it is not quoted.
fn string_value(raw: &str) -> Option<String> {
    let inner = raw.trim().strip_prefix('"')?.strip_suffix('"')?;
    Some(unescape(inner))
}

fn required_string(
    fields: &HashMap<String, String>,
    key: &str,
    line: &str,
) -> Result<String> {
    fields
        .get(key)
        .and_then(|raw| string_value(raw))
        .ok_or_else(|| parse_error(line, format!("missing {key} field")))
}

/// Absent key and explicit empty string both mean "no value".
fn optional_string(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(|raw| string_value(raw))
        .filter(|value| !value.is_empty())
}

fn required_instant(
    fields: &HashMap<String, String>,
    key: &str,
    line: &str,
) -> Result<chrono::NaiveDateTime> {
    let raw = required_string(fields, key, line)?;
    time::parse_from_storage(&raw).map_err(|_| parse_error(line, format!("invalid {key} field")))
}

fn parse_error(line: &str, reason: impl Into<String>) -> Error {
    Error::RecordParse {
        line: line.trim().to_string(),
        reason: reason.into(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // Unknown escape: keep it verbatim rather than guess.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
