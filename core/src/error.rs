use std::io;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a taskline operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown keyword or blank input line.
    #[error("I don't recognise the command '{0}'")]
    InvalidCommand(String),

    /// A required free-text part of a command was blank.
    #[error("the {0} cannot be empty")]
    EmptyField(&'static str),

    /// Missing or duplicated `/by`, `/from` or `/to` delimiter.
    #[error("malformed {keyword} command, expected: {usage}")]
    MalformedDelimiter {
        keyword: &'static str,
        usage: &'static str,
    },

    /// Task number is not an integer or falls outside `[1, count]`.
    #[error("invalid task number '{input}': expected an integer between 1 and {count}")]
    InvalidTaskNumber { input: String, count: usize },

    /// Date text matched neither accepted format.
    #[error("cannot parse date '{input}': accepted formats are yyyy-mm-dd and d/m/yyyy HHmm")]
    DateFormat { input: String },

    /// Duration phrase could not be understood.
    #[error("cannot parse duration '{0}'")]
    InvalidDuration(String),

    /// A persisted record line could not be decoded.
    #[error("malformed record ({reason}): {line}")]
    RecordParse { line: String, reason: String },

    /// I/O failure while reading or writing the task file.
    #[error("storage failure: {0}")]
    Storage(#[from] io::Error),
}
