pub mod list;
pub mod task;

pub use list::TaskList;
pub use task::{Task, TaskKind};
