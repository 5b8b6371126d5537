//! Core of taskline, a single-user line-oriented task tracker:
//! command parsing, the task model, the record codec, persistence and
//! the session loop. Presentation lives in the `taskline-cli` binary.

pub mod codec;
pub mod command;
pub mod duration;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod storage;
pub mod time;
pub mod ui;

pub use command::{Command, Outcome};
pub use error::{Error, Result};
pub use model::{Task, TaskKind, TaskList};
pub use session::Session;
pub use storage::Storage;
pub use ui::{Console, ScriptedConsole};
