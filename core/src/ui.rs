//! The input/output channel the session talks through. Keeping this
//! behind a trait means the core never touches a process-wide stream:
//! the binary plugs in stdin/stdout, tests plug in a script.

use std::collections::VecDeque;

pub trait Console {
    /// Next raw input line, or `None` when input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    fn write_lines(&mut self, lines: &[String]);
}

/// A console fed from canned input lines that captures everything
/// written to it. Doubles as the buffered responder mode.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn write_lines(&mut self, lines: &[String]) {
        self.output.extend(lines.iter().cloned());
    }
}
